//! Closed value sets accepted by the news API.
//!
//! Every filter that takes a fixed vocabulary (sort order, search scope,
//! language, category, country) is modelled as a string newtype with one
//! associated constant per literal the service documents. The newtype can
//! hold any string so that a typo coming from user input survives until
//! [`validate`](crate::params::RequestParams::validate) rejects it, instead
//! of being silently dropped at parse time.
//!
//! | Type | Values | Query key |
//! |------|--------|-----------|
//! | [`SortBy`] | 3 | `sortBy` |
//! | [`SearchIn`] | 3 | `searchIn` |
//! | [`Language`] | 14 | `language` |
//! | [`Category`] | 7 | `category` |
//! | [`Country`] | 54 | `country` |
//!
//! Membership is exact: no case folding, no trimming, and the empty string
//! is never a member.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned by `FromStr` when a string is not part of the value set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownValue {
    /// Human readable name of the value set (e.g. `"country"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self(Cow::Borrowed($lit));
            )+

            /// Every value the service accepts, in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The raw wire literal.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` iff the value is one of the literals in the table.
            pub fn is_valid(&self) -> bool {
                matches!(self.as_str(), $($lit)|+)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(Cow::Owned(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Cow::Owned(s))
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            /// Strict parse: only table literals are accepted.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = Self::from(s);
                if value.is_valid() {
                    Ok(value)
                } else {
                    Err(UnknownValue {
                        kind: $kind,
                        value: s.to_owned(),
                    })
                }
            }
        }
    };
}

string_enum! {
    /// Order in which the `everything` endpoint returns articles.
    SortBy, "sort key" {
        /// Articles more closely related to the query come first.
        RELEVANCY = "relevancy",
        /// Articles from popular sources and publishers come first.
        POPULARITY = "popularity",
        /// Newest articles come first. This is the service default.
        PUBLISHED_AT = "publishedAt",
    }
}

string_enum! {
    /// Article field the `everything` query is matched against.
    SearchIn, "search key" {
        TITLE = "title",
        DESCRIPTION = "description",
        CONTENT = "content",
    }
}

string_enum! {
    /// Two-letter code of the language an article or source is written in.
    ///
    /// The codes are the ones the service publishes, which is why Hebrew is
    /// `hr` and Urdu is `ud`.
    Language, "language" {
        ARABIC = "ar",
        GERMAN = "de",
        ENGLISH = "en",
        SPANISH = "es",
        FRENCH = "fr",
        HEBREW = "hr",
        ITALIAN = "it",
        DUTCH = "nl",
        NORWEGIAN = "no",
        PORTUGUESE = "pt",
        RUSSIAN = "ru",
        SAMI = "se",
        URDU = "ud",
        CHINESE = "zh",
    }
}

string_enum! {
    /// Kind of news a source produces.
    Category, "category" {
        BUSINESS = "business",
        ENTERTAINMENT = "entertainment",
        GENERAL = "general",
        HEALTH = "health",
        SCIENCE = "science",
        SPORTS = "sports",
        TECHNOLOGY = "technology",
    }
}

string_enum! {
    /// ISO 3166 alpha-2 code of the country a source publishes from.
    Country, "country" {
        UNITED_ARAB_EMIRATES = "ae",
        ARGENTINA = "ar",
        AUSTRIA = "at",
        AUSTRALIA = "au",
        BELGIUM = "be",
        BULGARIA = "bg",
        BRAZIL = "br",
        CANADA = "ca",
        SWITZERLAND = "ch",
        CHINA = "cn",
        COLOMBIA = "co",
        CUBA = "cu",
        CZECHIA = "cz",
        GERMANY = "de",
        EGYPT = "eg",
        FRANCE = "fr",
        UNITED_KINGDOM = "gb",
        GREECE = "gr",
        HONG_KONG = "hk",
        HUNGARY = "hu",
        INDONESIA = "id",
        IRELAND = "ie",
        ISRAEL = "il",
        INDIA = "in",
        ITALY = "it",
        JAPAN = "jp",
        KOREA = "kr",
        LITHUANIA = "lt",
        LATVIA = "lv",
        MOROCCO = "ma",
        MEXICO = "mx",
        MALAYSIA = "my",
        NIGERIA = "ng",
        NETHERLANDS = "nl",
        NORWAY = "no",
        NEW_ZEALAND = "nz",
        PHILIPPINES = "ph",
        POLAND = "pl",
        PORTUGAL = "pt",
        ROMANIA = "ro",
        SERBIA = "rs",
        RUSSIA = "ru",
        SAUDI_ARABIA = "sa",
        SWEDEN = "se",
        SINGAPORE = "sg",
        SLOVENIA = "si",
        SLOVAKIA = "sk",
        THAILAND = "th",
        TURKEY = "tr",
        TAIWAN = "tw",
        UKRAINE = "ua",
        UNITED_STATES = "us",
        VENEZUELA = "ve",
        SOUTH_AFRICA = "za",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_valid() {
        assert_eq!(SortBy::ALL.len(), 3);
        for sort_by in SortBy::ALL {
            assert!(sort_by.is_valid(), "{sort_by} should be valid");
        }
        assert!(!SortBy::from("test").is_valid());
        assert!(!SortBy::from("publishedat").is_valid());
    }

    #[test]
    fn test_search_in_valid() {
        assert_eq!(SearchIn::ALL.len(), 3);
        for search_in in SearchIn::ALL {
            assert!(search_in.is_valid());
        }
        assert!(!SearchIn::from("test").is_valid());
    }

    #[test]
    fn test_language_valid() {
        assert_eq!(Language::ALL.len(), 14);
        for language in Language::ALL {
            assert!(language.is_valid());
        }
        assert!(!Language::from("test").is_valid());
        assert!(!Language::from("EN").is_valid());
    }

    #[test]
    fn test_category_valid() {
        assert_eq!(Category::ALL.len(), 7);
        for category in Category::ALL {
            assert!(category.is_valid());
        }
        assert!(!Category::from("test").is_valid());
    }

    #[test]
    fn test_country_valid() {
        assert_eq!(Country::ALL.len(), 54);
        for country in Country::ALL {
            assert!(country.is_valid());
        }
        assert!(!Country::from("test").is_valid());
        assert!(!Country::from(" us").is_valid());
    }

    #[test]
    fn test_empty_string_is_never_valid() {
        assert!(!SortBy::from("").is_valid());
        assert!(!SearchIn::from("").is_valid());
        assert!(!Language::from("").is_valid());
        assert!(!Category::from("").is_valid());
        assert!(!Country::from("").is_valid());
    }

    #[test]
    fn test_owned_value_equals_constant() {
        assert_eq!(Language::from(String::from("hr")), Language::HEBREW);
        assert_eq!(Country::from("ar"), Country::ARGENTINA);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("us".parse::<Country>().unwrap(), Country::UNITED_STATES);

        let err = "xx".parse::<Country>().unwrap_err();
        assert_eq!(err.kind, "country");
        assert_eq!(err.to_string(), r#"unknown country "xx""#);
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let json = serde_json::to_string(&Category::SCIENCE).unwrap();
        assert_eq!(json, r#""science""#);

        let parsed: Category = serde_json::from_str(r#""sports""#).unwrap();
        assert_eq!(parsed, Category::SPORTS);

        // Unknown values still decode; the service is trusted.
        let parsed: Category = serde_json::from_str(r#""weather""#).unwrap();
        assert!(!parsed.is_valid());
    }
}
