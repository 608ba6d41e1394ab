use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::SqlValue;
use crate::errors::{AppError, AppResult};
use crate::utils::validation::{
    deserialize_present, is_valid_equity, require_non_empty, require_non_negative,
};

/// A job posting as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    /// Decimal string in [0, 1]
    pub equity: Option<String>,
    pub company_handle: String,
}

/// Equity as it may arrive in a request body: `"0.1"` or `0.1`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EquityInput {
    Text(String),
    Number(f64),
}

impl EquityInput {
    /// Normalize to the stored decimal string, rejecting values outside [0, 1]
    pub fn normalize(&self) -> AppResult<String> {
        match self {
            Self::Text(text) if is_valid_equity(text) => Ok(text.clone()),
            Self::Number(n) if n.is_finite() && (0.0..=1.0).contains(n) => Ok(n.to_string()),
            _ => Err(AppError::bad_request(
                "equity must be a number between 0 and 1",
            )),
        }
    }
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobCreateRequest {
    pub title: String,
    pub company_handle: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<EquityInput>,
}

impl JobCreateRequest {
    /// Check field rules and produce the insertable record
    pub fn validate(self) -> AppResult<NewJob> {
        require_non_empty("title", &self.title)?;
        require_non_empty("companyHandle", &self.company_handle)?;
        if let Some(salary) = self.salary {
            require_non_negative("salary", salary)?;
        }
        let equity = self.equity.as_ref().map(EquityInput::normalize).transpose()?;

        Ok(NewJob {
            title: self.title,
            salary: self.salary,
            equity,
            company_handle: self.company_handle,
        })
    }
}

/// A validated job ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<String>,
    pub company_handle: String,
}

/// Body of `PATCH /jobs/:id`
///
/// `id` and `companyHandle` are not part of the schema, so sending them is an
/// unknown-field error. An explicit `null` clears salary or equity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdateRequest {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub salary: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub equity: Option<Option<EquityInput>>,
}

impl JobUpdateRequest {
    pub fn validate(self) -> AppResult<JobUpdate> {
        let title = match self.title {
            Some(Some(title)) => {
                require_non_empty("title", &title)?;
                Some(title)
            }
            Some(None) => return Err(AppError::bad_request("title must not be null")),
            None => None,
        };
        if let Some(Some(salary)) = self.salary {
            require_non_negative("salary", salary)?;
        }
        let equity = match self.equity {
            Some(Some(equity)) => Some(Some(equity.normalize()?)),
            Some(None) => Some(None),
            None => None,
        };

        Ok(JobUpdate {
            title,
            salary: self.salary,
            equity,
        })
    }
}

/// A validated partial update. Outer `None` leaves the column untouched,
/// `Some(None)` sets it to NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub salary: Option<Option<i64>>,
    pub equity: Option<Option<String>>,
}

impl JobUpdate {
    /// Fields present in this update, in a stable order, keyed by API name
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(title) = self.title {
            fields.push(("title", SqlValue::from(title)));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::from(salary)));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::from(equity)));
        }
        fields
    }
}

/// Query string of `GET /jobs`, before coercion
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobSearchQuery {
    pub title: Option<String>,
    pub min_salary: Option<String>,
    pub has_equity: Option<String>,
}

impl JobSearchQuery {
    /// Coerce query-string values into typed filters
    ///
    /// `minSalary` must be a non-negative integer. `hasEquity` is true only
    /// for the literal `"true"`.
    pub fn into_filter(self) -> AppResult<JobFilter> {
        let min_salary = match self.min_salary {
            Some(raw) => {
                let value: i64 = raw.trim().parse().map_err(|_| {
                    AppError::bad_request(format!("minSalary must be an integer, got '{raw}'"))
                })?;
                require_non_negative("minSalary", value)?;
                Some(value)
            }
            None => None,
        };

        Ok(JobFilter {
            title: self.title,
            min_salary,
            has_equity: self.has_equity.map(|v| v == "true"),
        })
    }
}

/// Optional constraints for listing jobs; all present clauses must match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Inclusive lower bound on salary
    pub min_salary: Option<i64>,
    /// `Some(true)` keeps only jobs with non-zero equity
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_salary(mut self, min_salary: i64) -> Self {
        self.min_salary = Some(min_salary);
        self
    }

    pub fn has_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = Some(has_equity);
        self
    }
}
