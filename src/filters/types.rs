//! Filter identifiers, values and the canonical filter state

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::FilterOption;

/// One filter dimension. `Custom` covers types registered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterType {
    Name,
    Genres,
    Platforms,
    Stores,
    Tags,
    DateRange,
    MetacriticRange,
    Custom(String),
}

static BUILTIN: [FilterType; 7] = [
    FilterType::Name,
    FilterType::Genres,
    FilterType::Platforms,
    FilterType::Stores,
    FilterType::Tags,
    FilterType::DateRange,
    FilterType::MetacriticRange,
];

impl FilterType {
    /// Parse a string tag. Empty tags name no filter.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let filter_type = match tag {
            "" => return None,
            "name" => Self::Name,
            "genres" => Self::Genres,
            "platforms" => Self::Platforms,
            "stores" => Self::Stores,
            "tags" => Self::Tags,
            "dateRange" => Self::DateRange,
            "metacriticRange" => Self::MetacriticRange,
            other => Self::Custom(other.to_string()),
        };
        Some(filter_type)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Genres => "genres",
            Self::Platforms => "platforms",
            Self::Stores => "stores",
            Self::Tags => "tags",
            Self::DateRange => "dateRange",
            Self::MetacriticRange => "metacriticRange",
            Self::Custom(tag) => tag,
        }
    }

    /// The built-in dimensions, in panel order
    pub fn builtin() -> &'static [FilterType] {
        &BUILTIN
    }

    /// Category dimensions hold a set of option values
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Genres | Self::Platforms | Self::Stores | Self::Tags)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Parsed `(start, end)`. A bound that is empty or not a valid
    /// `yyyy-mm-dd` date is `None`.
    pub fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (parse_date(&self.start), parse_date(&self.end))
    }

    /// At least one bound parses
    pub fn is_active(&self) -> bool {
        let (start, end) = self.bounds();
        start.is_some() || end.is_some()
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// A closed numeric interval, used for both the selected metacritic window
/// and the slider's absolute domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const FULL: ScoreRange = ScoreRange { min: 0.0, max: 100.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp into `domain`, swapping the ends first if they are inverted
    pub fn sanitized(self, domain: ScoreRange) -> Self {
        let (lo, hi) = if self.min > self.max { (self.max, self.min) } else { (self.min, self.max) };
        let clamp = |v: f64| {
            if v.is_nan() {
                return domain.min;
            }
            v.max(domain.min).min(domain.max)
        };
        Self { min: clamp(lo), max: clamp(hi) }
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Typed value carried between adapters and the state manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    Text(String),
    Selection(Vec<String>),
    Dates(DateRange),
    Range(ScoreRange),
}

impl FilterValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Selection(_) => "selection",
            Self::Dates(_) => "dates",
            Self::Range(_) => "range",
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    pub fn as_selection(&self) -> &[String] {
        match self {
            Self::Selection(values) => values,
            _ => &[],
        }
    }

    pub fn as_dates(&self) -> DateRange {
        match self {
            Self::Dates(range) => range.clone(),
            _ => DateRange::default(),
        }
    }

    pub fn as_range(&self) -> ScoreRange {
        match self {
            Self::Range(range) => *range,
            _ => ScoreRange::default(),
        }
    }
}

/// Canonical, serializable state of every filter dimension.
///
/// `#[serde(default)]` on the struct gives the field-by-field merge over
/// defaults when reading a partial persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub name: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub stores: Vec<String>,
    pub tags: Vec<String>,
    pub date_range: DateRange,
    pub metacritic_range: ScoreRange,
    pub ordering: String,
    /// Values for runtime-registered filter types, keyed by tag
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, FilterValue>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            name: String::new(),
            genres: Vec::new(),
            platforms: Vec::new(),
            stores: Vec::new(),
            tags: Vec::new(),
            date_range: DateRange::default(),
            metacritic_range: ScoreRange::FULL,
            ordering: String::new(),
            extras: BTreeMap::new(),
        }
    }
}

impl FilterState {
    /// Selected option values for a category dimension
    pub fn selection(&self, filter_type: &FilterType) -> Option<&[String]> {
        match filter_type {
            FilterType::Genres => Some(&self.genres),
            FilterType::Platforms => Some(&self.platforms),
            FilterType::Stores => Some(&self.stores),
            FilterType::Tags => Some(&self.tags),
            _ => None,
        }
    }

    /// Current value of a dimension, shaped for its adapter
    pub fn value_of(&self, filter_type: &FilterType) -> Option<FilterValue> {
        let value = match filter_type {
            FilterType::Name => FilterValue::Text(self.name.clone()),
            FilterType::Genres | FilterType::Platforms | FilterType::Stores | FilterType::Tags => {
                FilterValue::Selection(self.selection(filter_type).unwrap_or_default().to_vec())
            }
            FilterType::DateRange => FilterValue::Dates(self.date_range.clone()),
            FilterType::MetacriticRange => FilterValue::Range(self.metacritic_range),
            FilterType::Custom(tag) => return self.extras.get(tag).cloned(),
        };
        Some(value)
    }
}

/// Declarative description of one filter section in the panel
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub filter_type: FilterType,
    pub title: String,
    pub placeholder: Option<String>,
    pub options: Vec<FilterOption>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
    pub unit: Option<String>,
    pub enabled: bool,
    /// Multi-select for option adapters; ignored by the others
    pub multiple: bool,
}

impl FilterConfig {
    pub fn new(filter_type: FilterType, title: impl Into<String>) -> Self {
        Self {
            filter_type,
            title: title.into(),
            placeholder: None,
            options: Vec::new(),
            min_value: None,
            max_value: None,
            step: None,
            unit: None,
            enabled: true,
            multiple: true,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = options;
        self
    }

    pub fn bounds(mut self, domain: ScoreRange, step: f64) -> Self {
        self.min_value = Some(domain.min);
        self.max_value = Some(domain.max);
        self.step = Some(step);
        self
    }

    pub fn single(mut self) -> Self {
        self.multiple = false;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
