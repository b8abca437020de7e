use sqlx::SqlitePool;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::services::catalog::CATALOG;

/// Brings the department/course tables in line with the static catalog.
pub struct CatalogSeeder {
    db: SqlitePool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedStats {
    pub departments_added: usize,
    pub courses_added: usize,
}

impl CatalogSeeder {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Idempotent: a department is matched by exact name and its courses are
    /// only inserted while it owns none. Existing rows are never touched.
    pub async fn ensure_catalog(&self) -> Result<SeedStats, AppError> {
        let mut stats = SeedStats::default();
        let mut tx = self.db.begin().await?;

        for department in CATALOG {
            let department_id =
                match repository::find_department_by_name(&mut *tx, department.name).await? {
                    Some(existing) => existing.id,
                    None => {
                        stats.departments_added += 1;
                        info!("Department added: {}", department.name);
                        repository::insert_department(&mut *tx, department.name).await?
                    }
                };

            if repository::count_courses_for_department(&mut *tx, department_id).await? > 0 {
                continue;
            }

            for (year, semester, course_name) in department.courses {
                repository::insert_course(&mut *tx, department_id, *year, *semester, course_name)
                    .await?;
            }
            stats.courses_added += department.courses.len();
            info!("{} courses added.", department.name);
        }

        tx.commit().await?;
        Ok(stats)
    }
}
