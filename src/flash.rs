//! One-shot confirmation messages carried across a redirect in a signed cookie.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    CourseAdded,
    CourseRemoved,
    CourseRenamed,
    NoteAdded,
    NoteDeleted,
}

impl Flash {
    const ALL: [Flash; 5] = [
        Flash::CourseAdded,
        Flash::CourseRemoved,
        Flash::CourseRenamed,
        Flash::NoteAdded,
        Flash::NoteDeleted,
    ];

    fn key(self) -> &'static str {
        match self {
            Flash::CourseAdded => "course_added",
            Flash::CourseRemoved => "course_removed",
            Flash::CourseRenamed => "course_renamed",
            Flash::NoteAdded => "note_added",
            Flash::NoteDeleted => "note_deleted",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.key() == key)
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::CourseAdded => "Course added to current semester.",
            Flash::CourseRemoved => "Course removed from current semester.",
            Flash::CourseRenamed => "Course name updated successfully!",
            Flash::NoteAdded => "Note added successfully!",
            Flash::NoteDeleted => "Note deleted successfully!",
        }
    }
}

/// Queues `flash` for the next rendered page.
pub fn push(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, flash.key()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Reads the pending flash, if any, and clears it from the client.
///
/// Cookies with a bad signature or an unknown key are ignored.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = Flash::from_key(cookie.value());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, flash)
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Key;

    use super::*;

    #[test]
    fn test_push_then_take() {
        let jar = push(SignedCookieJar::new(Key::generate()), Flash::NoteDeleted);

        let (jar, flash) = take(jar);
        assert_eq!(flash, Some(Flash::NoteDeleted));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_take_without_cookie() {
        let (_, flash) = take(SignedCookieJar::new(Key::generate()));
        assert_eq!(flash, None);
    }

    #[test]
    fn test_keys_are_distinct() {
        for flash in Flash::ALL {
            assert_eq!(Flash::from_key(flash.key()), Some(flash));
        }
        assert_eq!(Flash::from_key("deleted_everything"), None);
    }
}
