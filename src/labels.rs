//! Static per-language label catalogs
//!
//! One read-only catalog per supported UI language, loaded at compile time
//! and never mutated. Using a plain struct of `&'static str` fields makes a
//! missing label a build failure rather than a per-request lookup error.

use crate::model::{EducationLevel, Language, MaritalStatus};

/// Display strings for one UI language
#[derive(Debug)]
pub struct LabelCatalog {
    pub contacts: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub personal_info: &'static str,
    pub birth_date: &'static str,
    pub location: &'static str,
    pub marital_status: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub courses: &'static str,
    marital_single: &'static str,
    marital_married: &'static str,
    education_higher: &'static str,
    education_incomplete: &'static str,
    education_vocational: &'static str,
    education_secondary: &'static str,
}

impl LabelCatalog {
    /// Display string for a marital status code; empty for absent or
    /// unrecognized codes (never the raw code)
    pub fn marital_status_label(&self, code: &str) -> &'static str {
        match MaritalStatus::from_code(code) {
            Some(MaritalStatus::Single) => self.marital_single,
            Some(MaritalStatus::Married) => self.marital_married,
            None => "",
        }
    }

    /// Display string for an education level code; empty for absent or
    /// unrecognized codes (never the raw code)
    pub fn education_level_label(&self, code: &str) -> &'static str {
        match EducationLevel::from_code(code) {
            Some(EducationLevel::Higher) => self.education_higher,
            Some(EducationLevel::Incomplete) => self.education_incomplete,
            Some(EducationLevel::Vocational) => self.education_vocational,
            Some(EducationLevel::Secondary) => self.education_secondary,
            None => "",
        }
    }
}

/// Catalog for the given language
pub fn catalog(language: Language) -> &'static LabelCatalog {
    match language {
        Language::Ru => &RU,
        Language::Uz => &UZ,
    }
}

static RU: LabelCatalog = LabelCatalog {
    contacts: "Контакты",
    phone: "Телефон",
    email: "Email",
    skills: "Навыки",
    languages: "Языки",
    personal_info: "Личная информация",
    birth_date: "Дата рождения",
    location: "Город проживания",
    marital_status: "Семейное положение",
    experience: "Опыт работы",
    education: "Образование",
    courses: "Курсы",
    marital_single: "Не женат / Не замужем",
    marital_married: "Женат / Замужем",
    education_higher: "Высшее",
    education_incomplete: "Неоконченное высшее",
    education_vocational: "Среднее специальное",
    education_secondary: "Среднее",
};

static UZ: LabelCatalog = LabelCatalog {
    contacts: "Aloqa",
    phone: "Telefon",
    email: "Email",
    skills: "Ko'nikmalar",
    languages: "Tillar",
    personal_info: "Shaxsiy ma'lumotlar",
    birth_date: "Tug'ilgan sana",
    location: "Yashash shahri",
    marital_status: "Oilaviy holati",
    experience: "Ish tajribasi",
    education: "Ta'lim",
    courses: "Kurslar",
    marital_single: "Uylanmagan / Turmushga chiqmagan",
    marital_married: "Uylangan / Turmushga chiqqan",
    education_higher: "Oliy",
    education_incomplete: "Tugallanmagan oliy",
    education_vocational: "O'rta maxsus",
    education_secondary: "O'rta",
};
