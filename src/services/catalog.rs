//! Static curriculum catalog loaded by the seeder.
//!
//! Course names are reproduced exactly as published, stray tabs included.

use crate::models::Semester;
use crate::models::Semester::{Fall, Spring};

pub type CatalogCourse = (i32, Semester, &'static str);

#[derive(Debug)]
pub struct DepartmentCatalog {
    pub name: &'static str,
    pub courses: &'static [CatalogCourse],
}

pub const CATALOG: &[DepartmentCatalog] = &[
    DepartmentCatalog {
        name: "Computer Engineering",
        courses: COMPUTER_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Industrial Engineering",
        courses: INDUSTRIAL_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Electrical-Electronics Engineering",
        courses: ELECTRICAL_ELECTRONICS_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Software Engineering",
        courses: SOFTWARE_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Energy Systems Engineering",
        courses: ENERGY_SYSTEMS_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Civil Engineering",
        courses: CIVIL_ENGINEERING,
    },
    DepartmentCatalog {
        name: "Mechanical Engineering",
        courses: MECHANICAL_ENGINEERING,
    },
];

const COMPUTER_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SE 1105 - PROGRAMMING AND PROBLEM SOLVING I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "COMP 1202 - DISCRETE STRUCTURES"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "PHYS 1122 - PHYSICS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    (1, Spring, "UNV. COMP 1 - UNIVERSITY ELECTIVE COURSE"),
    // 2nd year fall
    (2, Fall, "COMP 2233 - DATA STRUCTURES"),
    (2, Fall, "EEE 2274 - FUNDAMENTALS OF ELECTRONICS"),
    (2, Fall, "MATH 2260 - PROBABILITY AND STATISTICS FOR ENGINEERS"),
    (2, Fall, "SE 2228 - ALGORITHM ANALYSIS AND DESIGN"),
    (2, Fall, "UNV ELECT COMP - UNIVERSITY ELECTIVE COURSE"),
    // 2nd year spring
    (2, Spring, "COMP 2215 - OBJECT-ORIENTED PROGRAMMING"),
    (2, Spring, "COMP 3330 - AUTOMATA THEORY"),
    (2, Spring, "EEE 2110 - DIGITAL DESIGN"),
    (2, Spring, "MATH 2255 - LINEAR ALGEBRA"),
    // 3rd year fall
    (3, Fall, "COMP 3315 - COMPUTER ORGANIZATION"),
    (3, Fall, "COMP 3327 - COMPUTER NETWORKS"),
    (3, Fall, "MATH 2261 - INTRODUCTION TO DIFFERENTIAL EQUATIONS"),
    (3, Fall, "ELECT COMP A1 - DEPARTMENT ELECTIVE COURSE"),
    (3, Fall, "UNV. COMP 2 - UNIVERSITY ELECTIVE COURSE"),
    // 3rd year spring
    (3, Spring, "COMP 3304 - FUNDAMENTALS OF SOFTWARE ENGINEERING"),
    (3, Spring, "COMP 3323 - OPERATING SYSTEMS"),
    (3, Spring, "COMP 3328 - EMBEDDED SYSTEMS"),
    (3, Spring, "ENGR 3450 - PROJECT MANAGEMENT"),
    (3, Spring, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (3, Spring, "UNV. COMP 3 - UNIVERSITY ELECTIVE COURSE"),
    // 4th year fall
    (4, Fall, "COMP 4910 - SENIOR DESIGN PROJECT I"),
    (4, Fall, "ELECT COMP A2 - DEPARTMENT ELECTIVE COURSE"),
    (4, Fall, "ELECT COMP B2 - DEPARTMENT ELECTIVE COURSE"),
    (4, Fall, "UNV. COMP 4 - UNIVERSITY ELECTIVE COURSE"),
    // 4th year spring
    (4, Spring, "COMP 4920 - SENIOR DESIGN PROJECT II"),
    (4, Spring, "ELECT COMP A3 - DEPARTMENT ELECTIVE COURSE"),
    (4, Spring, "ELECT COMP B3 - DEPARTMENT ELECTIVE COURSE"),
];

const INDUSTRIAL_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "ENGR 1115 - INTRODUCTION TO PROGRAMMING"),
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "CHEM 1130 - ENGINEERING CHEMISTRY"),
    (1, Spring, "ENGR 1116 - OBJECT-ORIENTED PROGRAMMING"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "ECON 1120 - ESSANTIALS ECONOMICS"),
    (2, Fall, "IE 2511 - COST ANALYSIS IN ENGINEERING"),
    (2, Fall, "IE 2531 - PROBABILITY FOR ENGINEERS"),
    (2, Fall, "IE 2551 - ALGORITHMS AND COMPUTATION"),
    (2, Fall, "MATH 2255 - LINEAR ALGEBRA"),
    // 2nd year spring
    (2, Spring, "IE 2512 - ENGINEERING ECONOMICS"),
    (2, Spring, "IE 2524 - WORK SYSTEMS ANALYSIS AND DESIGN"),
    (2, Spring, "IE 2532 - STATISTICS FOR ENGINEERS"),
    (2, Spring, "IE 2552 - MODELING IN OPERATIONS RESEARCH"),
    (2, Spring, "MATH 2261 - INTRODUCTION TO DIFFERENTIAL EQUATIONS"),
    // 3rd year fall
    (3, Fall, "ENGR 3450 - PROJECT MANAGEMENT"),
    (3, Fall, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (3, Fall, "IE 3513 - QUALITY ASSURANCE AND RELIABILITY"),
    (3, Fall, "IE 3523 - PRODUCTION AND SERVICE SYSTEMS PLANNING"),
    (3, Fall, "IE 3553 - DETERMINISTIC OPERATIONS RESEARCH"),
    (3, Fall, "[G] UNV ELECT IE1 - UNIVERSITY ELECTIVE COURSE IE1"),
    // 3rd year spring
    (3, Spring, "IE 3511 - SYSTEM SIMULATION"),
    (3, Spring, "IE 3524 - INTEGRATED MANUFACTURING SYSTEMS"),
    (3, Spring, "IE 3554 - STOCHASTIC OPERATIONS RESEARCH"),
    (3, Spring, "IE 3562 - INDUSTRIAL INFORMATION SYSTEMS"),
    (3, Spring, "[G] ELECT IE 45X1-A - DEPARTMENT ELECTIVE COURSE IE 45X1-A"),
    // 4th year fall
    (4, Fall, "IE 4911 - SYSTEM ANALYSIS"),
    (4, Fall, "[G] ELECT IE 45X1-B - DEPARTMENT ELECTIVE COURSE IE 45X1-B"),
    (4, Fall, "[G] ELECT IE 45X2-A - DEPARTMENT ELECTIVE COURSE IE 45X2-A"),
    (4, Fall, "[G] UNV ELECT IE2 - UNIVERSITY ELECTIVE COURSE IE2"),
    // 4th year spring
    (4, Spring, "IE 4912 - SYSTEM DESIGN"),
    (4, Spring, "[G] ELECT IE 45X2-B - DEPARTMENT ELECTIVE COURSE IE 45X2-B"),
    (4, Spring, "[G] ELECT IE 45X3-A - DEPARTMENT ELECTIVE COURSE IE 45X3-A"),
    (4, Spring, "[G] ELECT IE 45X4-A - DEPARTMENT ELECTIVE COURSE IE 45X4-A"),
    (4, Spring, "[G] UNV ELECT IE3 - UNIVERSITY ELECTIVE COURSE IE3"),
];

const ELECTRICAL_ELECTRONICS_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "ENGR 1115 - INTRODUCTION TO PROGRAMMING"),
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "MATH 2255 - LINEAR ALGEBRA"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "PHYS 1122 - PHYSICS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "EEE 2271 - CIRCUIT THEORY I"),
    (2, Fall, "EEE 2273 - DIGITAL DESIGN"),
    (2, Fall, "MATH 2259 - ENGINEERING MATHEMATICS"),
    (2, Fall, "MATH 2263 - DIFFERENTIAL EQUATIONS AND DYNAMIC SYSTEMS"),
    // 2nd year spring
    (2, Spring, "EEE 2022 - CIRCUIT THEORY II"),
    (2, Spring, "EEE 2214 - ENGINEERING ELECTROMAGNETICS"),
    (2, Spring, "EEE 2426 - ANALOG ELECTRONICS"),
    (2, Spring, "ELECT EEE A1 - DEPARTMENTAL ELECTIVE COURSES EEE A1"),
    // 3rd year fall
    (3, Fall, "EEE 3435 -\tDIGITAL ELECTRONICS"),
    (3, Fall, "EEE 3513 -\tSIGNALS AND SYSTEMS"),
    (3, Fall, "EEE 3615 -\tELECTROMECHANICAL ENERGY CONVERSION"),
    (3, Fall, "MATH 3305 - PROBABILITY AND RANDOM PROCESSES"),
    (3, Fall, "ENGR 3450 - PROJECT MANAGEMENT"),
    // 3rd year spring
    (3, Spring, "EEE 3134 - MICROCONTROLLERS"),
    (3, Spring, "EEE 3524 - TELECOMMUNICATIONS"),
    (3, Spring, "EEE 3638 - POWER SYSTEMS"),
    (3, Spring, "EEE 3718 - FEEDBACK SYSTEMS"),
    (3, Spring, "UNV. EEE2 - UNIVERSITY ELECTIVE COURSES EEE2"),
    // 4th year fall
    (4, Fall, "EEE 4910 - SENIOR DESIGN PROJECT I"),
    (4, Fall, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (4, Fall, "ELECT EEE A2 - DEPARTMENTAL ELECTIVE COURSE A2"),
    (4, Fall, "ELECT EEE B1 - DEPARTMENTAL ELECTIVE COURSE B1"),
    (4, Fall, "UNV ELECT EEE1 - UNIVERSITY ELECTIVE COURSE EEE1"),
    // 4th year spring
    (4, Spring, "EEE 4920 - SENIOR DESIGN PROJECT II"),
    (4, Spring, "ELECT EEE A3 - DEPARTMENTAL ELECTIVE COURSE A3"),
    (4, Spring, "ELECT EEE B2 - DEPARTMENTAL ELECTIVE COURSE B2"),
    (4, Spring, "ELECT EEE B3 - DEPARTMENTAL ELECTIVE COURSE B3"),
    (4, Spring, "UNV ELECT EEE2 - UNIVERSITY ELECTIVE COURSE EEE2"),
];

const SOFTWARE_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SE 1105 - PROGRAMMING AND PROBLEM SOLVING I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "PHYS 1122 - PHYSICS II"),
    (1, Spring, "SE 1108 - PROGRAMMING AND PROBLEM SOLVING II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "MATH 2255 - LINEAR ALGEBRA"),
    (2, Fall, "COMP 1202 - DISCRETE COMPUTATIONAL STRUCTURES"),
    (2, Fall, "SE 2217 - SOFTWARE ENGINEERING PRINCIPLES"),
    (2, Fall, "SE 2310 - DATA STRUCTURES AND ALGORITHMS"),
    // 2nd year spring
    (2, Spring, "MATH 2261 - INTRODUCTION TO DIFFERENTIAL EQUATIONS"),
    (2, Spring, "SE 2226 - SOFTWARE QUALITY ASSURANCE AND TESTING"),
    (2, Spring, "SE 2228 - ANALYSIS AND DESIGN OF ALGORITHMS"),
    (2, Spring, "SE 2230 - DATABASE SYSTEMS"),
    (2, Spring, "SE 2232 - SOFTWARE SYSTEM ANALYSIS"),
    // 3rd year fall
    (3, Fall, "SE 3317 - SOFTWARE DESIGN AND ARCHITECTURE"),
    (3, Fall, "SE 3310 - OPERATING SYSTEMS AND NETWORKING"),
    (3, Fall, "MATH 2260 - PROBABILITY AND STATISTICS FOR ENGINEERING"),
    (3, Fall, "COMP 3330 - AUTOMATA THEORY"),
    (3, Fall, "UNV ELECT SE1 - UNIVERSITY ELECTIVE COURSE SE1"),
    // 3rd year spring
    (3, Spring, "EEE 2110\t- DIGITAL DESIGN"),
    (3, Spring, "\tENGR 3450 - PROJECT MANAGEMENT"),
    (3, Spring, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (3, Spring, "SE 3318 - SOFTWARE CONSTRUCTION"),
    (3, Spring, "SE 3332 - LOW LEVEL PROGRAMMING"),
    (3, Spring, "ELECT SE A1 - DEPARTMENT ELECTIVE COURSE A1"),
    // 4th year fall
    (4, Fall, "SE 4910 - GRADUATION DESIGN PROJECT I"),
    (4, Fall, "ELECT SE A2 - DEPARTMENTAL ELECTIVE COURSE A2"),
    (4, Fall, "ELECT SE A3 - DEPARTMENTAL ELECTIVE COURSE A3"),
    (4, Fall, "UNV ELECT SE2 - UNIVERSITY ELECTIVE COURSE SE2"),
    // 4th year spring
    (4, Spring, "SE 4920 - GRADUATION DESIGN PROJECT II"),
    (4, Spring, "ELECT SE B1 - DEPARTMENTAL ELECTIVE COURSE B1"),
    (4, Spring, "ELECT SE B2 - DEPARTMENTAL ELECTIVE COURSE B2"),
    (4, Spring, "UNV ELECT SE4 - UNIVERSITY ELECTIVE COURSE SE3"),
];

const ENERGY_SYSTEMS_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "ENGR 1115 - INTRODUCTION TO PROGRAMMING"),
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "CHEM 1130 - ENGINEERING CHEMISTRY"),
    (1, Spring, "ESE 1110 - INTRODUCTION TO ENERGY SYSTEMS ENGINEERING"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "PHYS 1122 - PHYSICS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "ENGR 2120 - INTRO TO COMPUTER AIDED MODELING"),
    (2, Fall, "MATH 2230 - COMPUTATIONAL METHODS IN ENGINEERING"),
    (2, Fall, "ME 2320 - THERMODYNAMICS"),
    (2, Fall, "MATH 2263 - DIFFERENTIAL EQUATIONS AND DYNAMIC SYSTEMS"),
    // 2nd year spring
    (2, Spring, "EEE 2280 - ELECTRIC CIRCUITS AND SYSTEMS"),
    (2, Spring, "ESE 2501 - MEASUREMENT TECHNIQUES AND INSTRUMENTATION"),
    (2, Spring, "MATH 2260 - PROBABILITY AND STATISTICS FOR ENGINEERING"),
    (2, Spring, "ME 3330 - FLUID MECHANICS AND MACHINERY"),
    // 3rd year fall
    (3, Fall, "EEE 3718 - FEEDBACK SYSTEMS"),
    (3, Fall, "ESE 3504 -\tSMART ENERGY SYSTEMS"),
    (3, Fall, "EEE 3615 -\tELECTROMECHANICAL ENERGY CONVERSION"),
    (3, Fall, "ME 2710 - MATERIAL SCIENCE"),
    (3, Fall, "ME 3320 - HEAT AND MASS TRANSFER"),
    // 3rd year spring
    (3, Spring, "ENGR 3450 - PROJECT MANAGEMENT"),
    (3, Spring, "ESE 3404 - ENERGY EFFICIENCY AND MANAGEMENT"),
    (3, Spring, "ESE 3510 - POWER CONVERSION SYSTEMS"),
    (3, Spring, "ELECT ESE B1 - DEPARTMENTAL ELECTIVE COURSES-B1"),
    (3, Spring, "ESE 32X2 - RENEWABLE ENERGY ELECTIVE II"),
    (3, Spring, "UNV ELECT ESE1 - UNIVERSITY ELECTIVE COURSE ESE1"),
    // 4th year fall
    (4, Fall, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (4, Fall, "ESE 4910 -\tENERGY SYSTEMS ANALYSIS"),
    (4, Fall, "ELECT ESE A1 - DEPARTMENTAL ELECTIVE COURSE A1"),
    (4, Fall, "ELECT ESE B1 - DEPARTMENTAL ELECTIVE COURSE B1"),
    (4, Fall, "UNV ELECT ESE2 - UNIVERSITY ELECTIVE COURSE ESE2"),
    // 4th year spring
    (4, Spring, "ESE 4920 - ENERGY SYSTEMS DESIGN"),
    (4, Spring, "ELECT ESE A2 - DEPARTMENTAL ELECTIVE COURSE A2"),
    (4, Spring, "ELECT ESE B2 - DEPARTMENTAL ELECTIVE COURSE B2"),
    (4, Spring, "ELECT ESE B3 - DEPARTMENTAL ELECTIVE COURSE B3"),
    (4, Spring, "UNV ELECT ESE3 - UNIVERSITY ELECTIVE COURSE ESE3"),
];

const CIVIL_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "ENGR 1115 - INTRODUCTION TO PROGRAMMING"),
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "CE 1102 - ENGINEERING MECHANICS I"),
    (1, Spring, "CHEM 1130 - ENGINEERING CHEMISTRY"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "CE 2101 - FUNDAMENTALS OF MATERIAL SCIENCE"),
    (2, Fall, "CE 2103 - STRENGTH OF MATERIALS"),
    (2, Fall, "CE 2105 - ENGINEERING MECHANICS II : DYNAMICS"),
    (2, Fall, "MATH 2230 - COMPUTATIONAL METHODS IN ENGINEERING"),
    (2, Fall, "MATH 2263 - DIFFERENTIAL EQUATIONS AND DYNAMIC SYSTEMS"),
    (2, Fall, "UNV ELECT CE1 - UNIVERSITY ELECTIVE CE 1"),
    // 2nd year spring
    (2, Spring, "CE 2102 - INTRODUCTION TO STRUCTURAL ANALYSIS"),
    (2, Spring, "CE 2104 - CONSTRUCTION MATERIALS"),
    (2, Spring, "CE 2106 - FLUID MECHANICS"),
    (2, Spring, "MATH 2260 - PROBABILITY AND STATISTICS FOR ENGINEERS"),
    // 3rd year fall
    (3, Fall, "CE 3101 - FUNDAMENTALS OF TRANSPORTATION ENGINEERING"),
    (3, Fall, "CE 3103 - SOIL MECHANICS"),
    (3, Fall, "CE 3105 - HYDROMECHANICS"),
    (3, Fall, "ENGR 3450 - PROJECT MANAGEMENT"),
    (3, Fall, "ELECT CE B1 - CE FIELD ELECTIVE GROUP B1"),
    // 3rd year spring
    (3, Spring, "CE 3102 - FUNDAMENTALS OF REINFORCED CONCRETE DESIGN"),
    (3, Spring, "CE 3104 - FUNDAMENTALS OF STEEL STRUCTURE DESIGN"),
    (3, Spring, "CE 3106 - FOUNDATION ENGINEERING"),
    (3, Spring, "CE 3108 - CONSTRUCTION MANAGEMENT"),
    (3, Spring, "CE 3110 - COMPUTER-AIDED DESIGN"),
    (3, Spring, "ELECT CE A1 - CE FIELD ELECTIVE GROUP A1"),
    // 4th year fall
    (4, Fall, "CE 4120 - SUSTAINABILITY AND CIRCULAR ECONOMY FOR CIVIL ENGINEERS"),
    (4, Fall, "CE 4910 - SENIOR DESIGN PROJECT I"),
    (4, Fall, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (4, Fall, "ELECT CE A2 - CE FIELD ELECTIVE GROUP A2"),
    (4, Fall, "ELECT CE A3 - CE FIELD ELECTIVE GROUP A3"),
    // 4th year spring
    (4, Spring, "CE 4920 - SENIOR DESIGN PROJECT II"),
    (4, Spring, "ELECT CE A4 - CE FIELD ELECTIVE GROUP A4"),
    (4, Spring, "ELECT CE B2 - CE FIELD ELECTIVE GROUP B2"),
    (4, Spring, "UNV ELECT CE2 - UNIVERSITY ELECTIVE CE2"),
    (4, Spring, "UNV ELECT CE3 - UNIVERSITY ELECTIVE CE3"),
];

const MECHANICAL_ENGINEERING: &[CatalogCourse] = &[
    // 1st year fall
    (1, Fall, "ENGR 1115 - INTRODUCTION TO PROGRAMMING"),
    (1, Fall, "MATH 1100 - MATHEMATICAL LOGIC"),
    (1, Fall, "MATH 1131 - CALCULUS I"),
    (1, Fall, "PHYS 1121 - PHYSICS I"),
    (1, Fall, "SOFL 1101 - ACADEMIC ENGLISH I"),
    // 1st year spring
    (1, Spring, "CHEM 1130 - ENGINEERING CHEMISTRY"),
    (1, Spring, "MATH 1132 - CALCULUS II"),
    (1, Spring, "ME 1110 - INTRODUCTION TO MECHANICAL ENGINEERING"),
    (1, Spring, "PHYS 1122 - PHYSICS II"),
    (1, Spring, "SOFL 1102 - ACADEMIC ENGLISH II"),
    // 2nd year fall
    (2, Fall, "EEE 2280 - ELECTRICAL CIRCUITS AND SYSTEMS"),
    (2, Fall, "ENGR 2120 - INTRODUCTION TO COMPUTER-AIDED MODELING"),
    (2, Fall, "ME 2210 - ENGINEERING MECHANICS I"),
    (2, Fall, "ME 2710 - MATERIAL SCIENCE"),
    // 2nd year spring
    (2, Spring, "MATH 2230 - COMPUTATIONAL METHODS IN ENGINEERING"),
    (2, Spring, "MATH 2263 - DIFFERENTIAL EQUATIONS AND DYNAMIC SYSTEMS"),
    (2, Spring, "ME 2220 - MECHANICS OF MATERIALS"),
    (2, Spring, "ME 2320 - THERMODYNAMICS"),
    // 3rd year fall
    (3, Fall, "EEE 3718 - FEEDBACK SYSTEMS"),
    (3, Fall, "ENGR 3450 - PROJECT MANAGEMENT"),
    (3, Fall, "ME 3220 - ENGINEERING MECHANICS II"),
    (3, Fall, "ME 3320 - HEAT AND MASS TRANSFER"),
    (3, Fall, "ME 3420 - PRODUCTION TECHNOLOGIES AND PROCESSES"),
    (3, Fall, "UNV ELECT ME1 - UNIVERSITY ELECTIVE COURSE ME1"),
    // 3rd year spring
    (3, Spring, "MATH 2260 - PROBABILITY AND STATISTICS FOR ENGINEERS"),
    (3, Spring, "ME 3330 - FLUID MECHANICS AND MACHINERY"),
    (3, Spring, "ME 3410 - MECHANICAL COMPONENTS"),
    (3, Spring, "ME 3510 - THEORY OF MACHINES AND MECHANISMS"),
    (3, Spring, "ELECT ME A1 - DEPARTMENTAL ELECTIVE COURSE A1"),
    // 4th year fall
    (4, Fall, "ENGR 4400 - ENGINEERING ETHICS AND SEMINAR"),
    (4, Fall, "ME 4910 - SENIOR DESIGN PROJECT I"),
    (4, Fall, "ELECT ME A2 - DEPARTMENTAL ELECTIVE COURSE A2"),
    (4, Fall, "ELECT ME B1 - DEPARTMENTAL ELECTIVE COURSE B1"),
    (4, Fall, "UNV ELECT ME2 - UNIVERSITY ELECTIVE COURSE ME2"),
    // 4th year spring
    (4, Spring, "ME 4920 - SENIOR DESIGN PROJECT II"),
    (4, Spring, "ELECT ME A3 - DEPARTMENTAL ELECTIVE COURSE A3"),
    (4, Spring, "ELECT ME B2 - DEPARTMENTAL ELECTIVE COURSE B2"),
    (4, Spring, "ELECT ME B3 - DEPARTMENTAL ELECTIVE COURSE B3"),
    (4, Spring, "UNV ELECT ME3 - UNIVERSITY ELECTIVE ME3"),
];
