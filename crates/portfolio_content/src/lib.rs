//! Bilingual static CV content tables and the reference-item provider.
//!
//! All display text lives here so the desktop runtime can re-derive titles and
//! window contents on a language switch without owning any copy itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The two supported display languages.
pub enum Language {
    /// English.
    En,
    /// Dutch.
    Nl,
}

impl Default for Language {
    fn default() -> Self {
        Self::Nl
    }
}

impl Language {
    /// Stable two-letter code used for persistence and the toggle button.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    /// Parses a persisted two-letter code.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "nl" => Some(Self::Nl),
            _ => None,
        }
    }

    /// Returns the other language.
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Nl,
            Self::Nl => Self::En,
        }
    }
}

/// One titled entry in a CV section: heading, optional date/subtitle line, and
/// body lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentEntry {
    /// Entry heading (role, project, degree, or person name).
    pub title: &'static str,
    /// Date range or institutional subtitle; empty when not applicable.
    pub subtitle: &'static str,
    /// Body lines rendered as individual paragraphs.
    pub lines: &'static [&'static str],
}

/// A single professional reference derived from the references table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    /// Stable kebab-case id, unique within the folder.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Position/organization lines.
    pub titles: Vec<String>,
    /// Contact line (phone and/or email).
    pub contact: String,
}

/// About-me paragraph.
pub fn about(language: Language) -> &'static str {
    match language {
        Language::En => {
            "As a recent graduate in Software Engineering, I have built a strong \
             foundation in both front- and back-end development. I am highly motivated \
             and driven to grow both professionally and personally, pushing my \
             introverted self to become more communicative by gaining experience in \
             Customer Service. I have experience in a wide variety of programming \
             languages and thrive on problem-solving and teamwork."
        }
        Language::Nl => {
            "Als recent afgestudeerde in Software Engineering heb ik een sterke basis \
             opgebouwd in zowel front- als back-end ontwikkeling. Ik ben zeer \
             gemotiveerd en gedreven om zowel professioneel als persoonlijk te groeien, \
             waarbij ik mijn introverte zelf push om communicatiever te worden door \
             ervaring op te doen in klantenservice. Ik heb ervaring met een breed scala \
             aan programmeertalen en floreer in probleemoplossing en teamwerk."
        }
    }
}

/// Home location line.
pub fn location(language: Language) -> &'static str {
    match language {
        Language::En => "The Hague",
        Language::Nl => "'s Gravenhage",
    }
}

/// Technical skills section.
pub fn skills(language: Language) -> &'static [ContentEntry] {
    const SKILL_LINES: &[&str] = &[
        "Languages: JavaScript, TypeScript, Python, Java, C#",
        "Frontend: React, Vue.js, HTML5, CSS3",
        "Backend: Node.js, .NET",
        "Database: SQL, MongoDB",
        "Tools: Git, SCRUM, Agile",
    ];
    match language {
        Language::En => &[ContentEntry {
            title: "Technical Skills",
            subtitle: "",
            lines: SKILL_LINES,
        }],
        Language::Nl => &[ContentEntry {
            title: "Technische Vaardigheden",
            subtitle: "",
            lines: SKILL_LINES,
        }],
    }
}

/// Work-experience section, newest first.
pub fn experience(language: Language) -> &'static [ContentEntry] {
    match language {
        Language::En => &[
            ContentEntry {
                title: "Customer Contact Employee @ KYC",
                subtitle: "January 2024 - present",
                lines: &[
                    "As a customer contact employee, I work with my colleagues to maintain \
                     customers in identifying personal data through digital guidance.",
                    "- Soft skills: Solution-oriented, patience, customer focus, communication",
                    "- Hard skills: JavaScript, HTML & CSS, TypeScript, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Software Engineer Intern @ Air Innovations",
                subtitle: "October 2023 - April 2024",
                lines: &[
                    "As a Software Engineer intern, I independently worked in an Agile \
                     environment on an interactive feature of a full-stack application where \
                     users can explore a flight simulator in a 3D environment.",
                    "- Soft skills: Stress resistant, critical thinking, focused research, \
                     independent work",
                    "- Hard skills: JavaScript, HTML & CSS, Three.JS, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Junior Software Engineer @ Air Innovations",
                subtitle: "June 2023 - October 2023",
                lines: &[
                    "As a Junior Software Engineer, I worked in an Agile environment on \
                     maintaining a full-stack web application used for navigating aircraft and \
                     associated components.",
                    "- Soft skills: Critical communication, stress resistant, critical \
                     thinking, SCRUM",
                    "- Hard skills: Python, JavaScript, HTML & CSS, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Software Engineer Intern @ Air Innovations",
                subtitle: "2022 - 2022",
                lines: &[
                    "As a Software Engineer intern, I worked on a full-stack application for \
                     a technical product that uses artificial intelligence for aircraft engine \
                     maintenance.",
                    "- Soft skills: solution-oriented thinking, creative thinking",
                    "- Hard skills: Python, JavaScript, HTML & CSS, Vue.JS, Git",
                ],
            },
        ],
        Language::Nl => &[
            ContentEntry {
                title: "Klantcontract medewerker @ KYC",
                subtitle: "januari 2024 - heden",
                lines: &[
                    "Als klantcontact medewerker onderhoud ik samen met mijn collega's \
                     klanten bij het identificeren van persoonsgegevens door digitale \
                     begeleiding.",
                    "- Soft skills: Oplossingsgericht, geduld, klantgerichtheid, communicatie",
                    "- Hard skills: JavaScript, HTML & CSS, TypeScript, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Software Engineer stagiair @ Air Innovations",
                subtitle: "oktober 2023 - april 2024",
                lines: &[
                    "Als stagair Software Engineer heb ik zelfstandig in een Agile omgeving \
                     gewerkt aan een interactieve feature van een full-stack applicatie \
                     waarmee gebruikers in een 3D-omgeving een vliegsimuator kunnen verkennen.",
                    "- Soft skills: Stressbestendig, kritisch denken, gericht research, \
                     zelfstandig werken",
                    "- Hard skills: JavaScript, HTML & CSS, Three.JS, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Junior Software Engineer @ Air Innovations",
                subtitle: "juni 2023 - oktober 2023",
                lines: &[
                    "Als Junior Software Engineer heb ik in een Agile omgeving gewerkt aan \
                     het onderhouden van een full-stack webapplicatie dat gebruikt werd voor \
                     het navigeren van luchtvaartuigen en bijhorende onderdelen.",
                    "- Soft skills: Kritisch communiceren, stressbestendig, kritisch denken, \
                     SCRUM",
                    "- Hard skills: Python, JavaScript, HTML & CSS, Vue.JS, Git",
                ],
            },
            ContentEntry {
                title: "Software Engineer stagiaire @ Air Innovations",
                subtitle: "2022 - 2022",
                lines: &[
                    "Als stagiair Software Engineer heb ik aan een full-stack applicatie \
                     gewerkt aan een applicatie voor een technisch product dat kunstmatige \
                     intelligentie gebruikt om het onderhoud van vliegtuigmotoren.",
                    "- Soft skills: oplossingsgericht denken, creatief denken",
                    "- Hard skills: Python, JavaScript, HTML & CSS, Vue.JS, Git",
                ],
            },
        ],
    }
}

/// Education and language proficiency section.
pub fn education(language: Language) -> &'static [ContentEntry] {
    match language {
        Language::En => &[
            ContentEntry {
                title: "HBO-ICT",
                subtitle: "The Hague University of Applied Sciences, 2019-2024",
                lines: &["Focus on Software Engineering and Development"],
            },
            ContentEntry {
                title: "Languages",
                subtitle: "",
                lines: &["Dutch - native", "English - fluent", "Tamil - good"],
            },
        ],
        Language::Nl => &[
            ContentEntry {
                title: "HBO-ICT",
                subtitle: "Haagse Hogeschool, 2019-2024",
                lines: &["Focus op Software Engineering en Development"],
            },
            ContentEntry {
                title: "Talen",
                subtitle: "",
                lines: &["Nederlands - moedertaal", "Engels - vloeiend", "Tamil - goed"],
            },
        ],
    }
}

/// Professional references table. Identical in both languages.
pub fn references(_language: Language) -> &'static [ContentEntry] {
    &[
        ContentEntry {
            title: "Fritjoff Büttner",
            subtitle: "",
            lines: &[
                "Principal Engineer @ Air Innovations",
                "+49777477047387 / fritjoff.buttner@aiir.nl",
            ],
        },
        ContentEntry {
            title: "Gertie de Jong-Sinnighe",
            subtitle: "",
            lines: &[
                "Manager Identificatie en Verificatie",
                "KYC @ ING Bank",
                "+31622804750",
            ],
        },
    ]
}

/// Personal/school projects section.
pub fn projects(language: Language) -> &'static [ContentEntry] {
    match language {
        Language::En => &[
            ContentEntry {
                title: "Estanged Manor",
                subtitle: "2022",
                lines: &[
                    "A videogame in Unity in the theme of 3D Thriller/Puzzle on PC.",
                    "- Soft skills: teamwork, effective communication",
                    "- Hard skills: C#, SCRUM",
                ],
            },
            ContentEntry {
                title: "Neighborhood App",
                subtitle: "2020-2021",
                lines: &[
                    "Worked in a small team to create a web application where neighborhood \
                     residents can communicate with each other and organize events. Used .NET \
                     for both backend and frontend to retrieve data.",
                    "- Soft skills: teamwork, effective communication",
                    "- Hard skills: .NET frameworks, Bootstrap",
                ],
            },
            ContentEntry {
                title: "The Challenge",
                subtitle: "2019-2020",
                lines: &[
                    "Created a mobile application in Android Studio using Java and XML.",
                    "- Soft skills: teamwork, effective communication",
                    "- Hard skills: Android Studio, Java, XML",
                ],
            },
        ],
        Language::Nl => &[
            ContentEntry {
                title: "Estanged Manor",
                subtitle: "2022",
                lines: &[
                    "Een programmeerspel met een 3D horror/thriller platform op PC. Hierbij \
                     is gebruik gemaakt van Unity en veel C# SCRUM.",
                    "- Soft skills: teamwerk, effectieve communicatie",
                    "- Hard skills: C#, SCRUM",
                ],
            },
            ContentEntry {
                title: "Buurt Applicatie",
                subtitle: "2020-2021",
                lines: &[
                    "In een kleine groep gewerkt aan het maken van een webapplicatie, waarbij \
                     buurtbewoners met elkaar kunnen communiceren en evenementen kunnen \
                     organiseren. Hierbij is gebruik gemaakt van .NET voor de backend en \
                     frontend om data op te halen.",
                    "- Soft skills: teamwerk, effectieve communicatie",
                    "- Hard skills: .NET frameworks, Bootstrap",
                ],
            },
            ContentEntry {
                title: "De Challenge",
                subtitle: "2019-2020",
                lines: &[
                    "Een mobiele applicatie in Android Studio gerealiseerd met gebruik van \
                     Java en XML.",
                    "- Soft skills: teamwerk, effectieve communicatie",
                    "- Hard skills: Android Studio, Java, XML",
                ],
            },
        ],
    }
}

/// Kebab-cases a display name into a reference slug.
fn reference_slug(name: &str) -> String {
    let flattened = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("ref-{flattened}")
}

/// Derives the ordered reference items shown in the references folder.
///
/// The last body line of each table entry is the contact line; the preceding
/// lines are position titles.
pub fn reference_items(language: Language) -> Vec<ReferenceItem> {
    references(language)
        .iter()
        .map(|entry| {
            let (contact, titles) = match entry.lines.split_last() {
                Some((contact, titles)) => (
                    (*contact).to_string(),
                    titles.iter().map(|line| (*line).to_string()).collect(),
                ),
                None => (String::new(), Vec::new()),
            };
            ReferenceItem {
                slug: reference_slug(entry.title),
                name: entry.title.to_string(),
                titles,
                contact,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn language_code_round_trips() {
        for language in [Language::En, Language::Nl] {
            assert_eq!(Language::parse(language.code()), Some(language));
        }
        assert_eq!(Language::parse(" EN "), Some(Language::En));
        assert_eq!(Language::parse("de"), None);
    }

    #[test]
    fn language_toggle_flips_between_both_values() {
        assert_eq!(Language::En.toggled(), Language::Nl);
        assert_eq!(Language::Nl.toggled(), Language::En);
    }

    #[test]
    fn every_section_has_content_in_both_languages() {
        for language in [Language::En, Language::Nl] {
            assert!(!about(language).is_empty());
            assert!(!location(language).is_empty());
            assert!(!skills(language).is_empty());
            assert!(!experience(language).is_empty());
            assert!(!education(language).is_empty());
            assert!(!references(language).is_empty());
            assert!(!projects(language).is_empty());
        }
    }

    #[test]
    fn reference_items_split_contact_from_titles() {
        let items = reference_items(Language::En);
        assert_eq!(items.len(), 2);

        let fritjoff = &items[0];
        assert_eq!(fritjoff.slug, "ref-fritjoff-büttner");
        assert_eq!(fritjoff.name, "Fritjoff Büttner");
        assert_eq!(fritjoff.titles, vec!["Principal Engineer @ Air Innovations"]);
        assert_eq!(fritjoff.contact, "+49777477047387 / fritjoff.buttner@aiir.nl");

        let gertie = &items[1];
        assert_eq!(gertie.slug, "ref-gertie-de-jong-sinnighe");
        assert_eq!(
            gertie.titles,
            vec!["Manager Identificatie en Verificatie", "KYC @ ING Bank"]
        );
        assert_eq!(gertie.contact, "+31622804750");
    }

    #[test]
    fn reference_slugs_are_unique_and_stable_across_languages() {
        let en: Vec<String> = reference_items(Language::En)
            .into_iter()
            .map(|item| item.slug)
            .collect();
        let nl: Vec<String> = reference_items(Language::Nl)
            .into_iter()
            .map(|item| item.slug)
            .collect();
        assert_eq!(en, nl);

        let mut deduped = en.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), en.len());
    }
}
