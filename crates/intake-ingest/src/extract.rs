//! Field extractor: reads the fixed intake controls into a snapshot.

use std::collections::BTreeSet;

use intake_model::{FieldName, FieldValue};
use tracing::warn;

use crate::{FormSource, SourceError};

/// Control names on the intake page.
pub mod controls {
    pub const FIRST_NAME: &str = "firstName";
    pub const MIDDLE_INITIAL: &str = "middleInit";
    pub const LAST_NAME: &str = "lastName";
    pub const DOB_MONTH: &str = "dobMM";
    pub const DOB_DAY: &str = "dobDD";
    pub const DOB_YEAR: &str = "dobYYYY";
    pub const ID_NUMBER: &str = "idNumber";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS1: &str = "addr1";
    pub const ADDRESS2: &str = "addr2";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";
    pub const HOUSING: &str = "housing";
    pub const VACCINATION: &str = "vax";
    pub const INSURANCE: &str = "ins";
    pub const MEDICAL_HISTORY: &str = "history";
    pub const SYMPTOMS: &str = "symptoms";
    pub const SALARY: &str = "salary";
    pub const USER_ID: &str = "userId";
    pub const PASSWORD: &str = "pw1";
    pub const PASSWORD_CONFIRM: &str = "pw2";
}

/// Raw month/day/year components of a date input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl DateParts {
    pub fn new(month: &str, day: &str, year: &str) -> Self {
        Self {
            month: month.to_string(),
            day: day.to_string(),
            year: year.to_string(),
        }
    }
}

/// Immutable view of the form taken at validation time.
///
/// The only mutation the engine performs is ZIP normalization, through
/// [`FormSnapshot::set_zip`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub first_name: String,
    pub middle_initial: String,
    pub last_name: String,
    pub date_of_birth: DateParts,
    pub id_number: String,
    pub email: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub housing: Option<String>,
    pub vaccination: Option<String>,
    pub insurance: Option<String>,
    pub medical_history: Vec<String>,
    pub symptoms: String,
    pub salary: Option<f64>,
    pub user_id: String,
    pub password: String,
    pub password_confirm: String,
    missing: BTreeSet<FieldName>,
}

impl FormSnapshot {
    /// True when a control behind `field` could not be looked up.
    pub fn is_missing(&self, field: FieldName) -> bool {
        self.missing.contains(&field)
    }

    pub fn missing_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.missing.iter().copied()
    }

    pub fn mark_missing(&mut self, field: FieldName) {
        self.missing.insert(field);
    }

    pub fn set_zip(&mut self, zip: &str) {
        self.zip = zip.to_string();
    }

    /// Typed value for one logical field.
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldName::MiddleInitial => FieldValue::Text(self.middle_initial.clone()),
            FieldName::LastName => FieldValue::Text(self.last_name.clone()),
            FieldName::IdNumber => FieldValue::Text(self.id_number.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::Phone => FieldValue::Text(self.phone.clone()),
            FieldName::Address1 => FieldValue::Text(self.address1.clone()),
            FieldName::Address2 => FieldValue::Text(self.address2.clone()),
            FieldName::City => FieldValue::Text(self.city.clone()),
            FieldName::State => FieldValue::Text(self.state.clone()),
            FieldName::UserId => FieldValue::Text(self.user_id.clone()),
            FieldName::DateOfBirth => {
                let parts = &self.date_of_birth;
                FieldValue::Text(format!("{}/{}/{}", parts.month, parts.day, parts.year))
            }
            FieldName::Zip => FieldValue::Text(self.zip.clone()),
            FieldName::Housing => FieldValue::Choice(self.housing.clone()),
            FieldName::Vaccination => FieldValue::Choice(self.vaccination.clone()),
            FieldName::Insurance => FieldValue::Choice(self.insurance.clone()),
            FieldName::Password => FieldValue::Text(self.password.clone()),
            FieldName::MedicalHistory => FieldValue::Choices(self.medical_history.clone()),
            FieldName::Symptoms => FieldValue::Text(self.symptoms.clone()),
            FieldName::Salary => FieldValue::Number(self.salary.unwrap_or_default()),
        }
    }

    /// Every field with its typed value, in declaration order.
    pub fn entries(&self) -> Vec<(FieldName, FieldValue)> {
        FieldName::ALL
            .into_iter()
            .map(|field| (field, self.value(field)))
            .collect()
    }
}

/// Read every intake control from `source`.
///
/// Lookups that fail are recorded against their logical field and the
/// corresponding value is left empty.
pub fn extract<S: FormSource + ?Sized>(source: &S) -> FormSnapshot {
    let mut reader = Reader {
        source,
        missing: BTreeSet::new(),
    };

    let first_name = reader.text(FieldName::FirstName, controls::FIRST_NAME);
    let middle_initial = reader.text(FieldName::MiddleInitial, controls::MIDDLE_INITIAL);
    let last_name = reader.text(FieldName::LastName, controls::LAST_NAME);
    let date_of_birth = DateParts {
        month: reader.text(FieldName::DateOfBirth, controls::DOB_MONTH),
        day: reader.text(FieldName::DateOfBirth, controls::DOB_DAY),
        year: reader.text(FieldName::DateOfBirth, controls::DOB_YEAR),
    };
    let id_number = reader.text(FieldName::IdNumber, controls::ID_NUMBER);
    let email = reader.text(FieldName::Email, controls::EMAIL);
    let phone = reader.text(FieldName::Phone, controls::PHONE);
    let address1 = reader.text(FieldName::Address1, controls::ADDRESS1);
    let address2 = reader.text(FieldName::Address2, controls::ADDRESS2);
    let city = reader.text(FieldName::City, controls::CITY);
    let state = reader.text(FieldName::State, controls::STATE);
    let zip = reader.text(FieldName::Zip, controls::ZIP);
    let housing = reader.selected(FieldName::Housing, controls::HOUSING);
    let vaccination = reader.selected(FieldName::Vaccination, controls::VACCINATION);
    let insurance = reader.selected(FieldName::Insurance, controls::INSURANCE);
    let medical_history = reader.checked(FieldName::MedicalHistory, controls::MEDICAL_HISTORY);
    let symptoms = reader.text(FieldName::Symptoms, controls::SYMPTOMS);
    let salary = reader.number(FieldName::Salary, controls::SALARY);
    let user_id = reader.text(FieldName::UserId, controls::USER_ID);
    let password = reader.text(FieldName::Password, controls::PASSWORD);
    let password_confirm = reader.text(FieldName::Password, controls::PASSWORD_CONFIRM);

    FormSnapshot {
        first_name,
        middle_initial,
        last_name,
        date_of_birth,
        id_number,
        email,
        phone,
        address1,
        address2,
        city,
        state,
        zip,
        housing,
        vaccination,
        insurance,
        medical_history,
        symptoms,
        salary,
        user_id,
        password,
        password_confirm,
        missing: reader.missing,
    }
}

struct Reader<'a, S: ?Sized> {
    source: &'a S,
    missing: BTreeSet<FieldName>,
}

impl<S: FormSource + ?Sized> Reader<'_, S> {
    fn text(&mut self, field: FieldName, control: &str) -> String {
        let value = self.source.text(control);
        self.record(field, value).unwrap_or_default()
    }

    fn selected(&mut self, field: FieldName, control: &str) -> Option<String> {
        let value = self.source.selected(control);
        self.record(field, value).flatten()
    }

    fn checked(&mut self, field: FieldName, control: &str) -> Vec<String> {
        let value = self.source.checked(control);
        self.record(field, value).unwrap_or_default()
    }

    fn number(&mut self, field: FieldName, control: &str) -> Option<f64> {
        let value = self.source.number(control);
        self.record(field, value)
    }

    fn record<T>(&mut self, field: FieldName, value: Result<T, SourceError>) -> Option<T> {
        match value {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(field = %field, %error, "form control unavailable");
                self.missing.insert(field);
                None
            }
        }
    }
}
