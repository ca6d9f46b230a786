use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a member visits the temple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempleFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
    Never,
    #[serde(other)]
    Unknown,
}

impl TempleFrequency {
    /// Ordinal rank for distance comparisons (Daily=5 .. Never=1)
    pub fn rank(&self) -> Option<i32> {
        match self {
            TempleFrequency::Daily => Some(5),
            TempleFrequency::Weekly => Some(4),
            TempleFrequency::Monthly => Some(3),
            TempleFrequency::Rarely => Some(2),
            TempleFrequency::Never => Some(1),
            TempleFrequency::Unknown => None,
        }
    }
}

impl fmt::Display for TempleFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TempleFrequency::Daily => "daily",
            TempleFrequency::Weekly => "weekly",
            TempleFrequency::Monthly => "monthly",
            TempleFrequency::Rarely => "rarely",
            TempleFrequency::Never => "never",
            TempleFrequency::Unknown => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// Dietary practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Vegetarian,
    Vegan,
    Eggetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::Eggetarian => "eggetarian",
            Diet::NonVegetarian => "non-vegetarian",
            Diet::Unknown => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// Self-placement between material pursuit (artha) and liberation (moksha)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Philosophy {
    #[serde(rename = "Artha-focused")]
    ArthaFocused,
    #[serde(rename = "Moksha-focused")]
    MokshaFocused,
    Balance,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Philosophy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Philosophy::ArthaFocused => "artha-focused",
            Philosophy::MokshaFocused => "moksha-focused",
            Philosophy::Balance => "balance",
            Philosophy::Unknown => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// Interest in the vanaprastha life stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VanaprasthaInterest {
    Yes,
    No,
    Open,
    #[serde(other)]
    Unknown,
}

/// Annual income bracket (ordered, lakh ranges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "Below 5L")]
    Below5,
    #[serde(rename = "5-10L")]
    Lakh5To10,
    #[serde(rename = "10-25L")]
    Lakh10To25,
    #[serde(rename = "25-50L")]
    Lakh25To50,
    #[serde(rename = "Above 50L")]
    Above50,
    #[serde(other)]
    Unknown,
}

impl IncomeBracket {
    /// Ordinal rank for distance comparisons (lowest bracket = 1)
    pub fn rank(&self) -> Option<i32> {
        match self {
            IncomeBracket::Below5 => Some(1),
            IncomeBracket::Lakh5To10 => Some(2),
            IncomeBracket::Lakh10To25 => Some(3),
            IncomeBracket::Lakh25To50 => Some(4),
            IncomeBracket::Above50 => Some(5),
            IncomeBracket::Unknown => None,
        }
    }
}

/// Service tier of the account, used only for a small ranking nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountTier {
    Standard,
    Premium,
    Elite,
    #[serde(other)]
    Unknown,
}

/// Member profile as shaped by the upstream persistence layer.
///
/// Every field except the identifier is optional; missing data never makes
/// the engine error, it simply contributes nothing to the relevant sub-score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(rename = "heightFeet", default)]
    pub height_feet: Option<u8>,
    #[serde(rename = "heightInches", default)]
    pub height_inches: Option<u8>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "spiritualPractices", default)]
    pub spiritual_practices: Vec<String>,
    #[serde(rename = "spiritualOrgs", default)]
    pub spiritual_orgs: Vec<String>,
    #[serde(rename = "templeFrequency", default)]
    pub temple_frequency: Option<TempleFrequency>,
    #[serde(default)]
    pub diet: Option<Diet>,
    #[serde(rename = "arthaVsMoksha", default)]
    pub artha_vs_moksha: Option<Philosophy>,
    #[serde(rename = "vanaprasthaInterest", default)]
    pub vanaprastha_interest: Option<VanaprasthaInterest>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<IncomeBracket>,
    #[serde(rename = "aboutMe", default)]
    pub about_me: Option<String>,
    #[serde(rename = "partnerNotes", default)]
    pub partner_notes: Option<String>,
    #[serde(rename = "favoriteQuote", default)]
    pub favorite_quote: Option<String>,
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,
    #[serde(rename = "qualityScore", default)]
    pub quality_score: Option<u8>,
    #[serde(rename = "accountTier", default)]
    pub account_tier: Option<AccountTier>,
}

impl Profile {
    /// Profile quality rating (1-10), defaulting to the neutral midpoint
    pub fn quality(&self) -> u8 {
        self.quality_score.unwrap_or(5).clamp(1, 10)
    }

    /// Account tier, defaulting to standard
    pub fn tier(&self) -> AccountTier {
        self.account_tier.unwrap_or(AccountTier::Standard)
    }

    /// Height in total inches, if recorded
    pub fn height_in_inches(&self) -> Option<i32> {
        self.height_feet
            .map(|ft| ft as i32 * 12 + self.height_inches.unwrap_or(0) as i32)
    }
}

/// Per-category weights applied by the aggregator.
///
/// Callers may override any subset; the engine does not require them to sum
/// to 1.0 and clamps its outputs regardless.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub spiritual: f64,
    pub lifestyle: f64,
    pub psychological: f64,
    pub demographic: f64,
    pub preference: f64,
    pub semantic: f64,
    pub growth: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            spiritual: 0.30,
            lifestyle: 0.15,
            psychological: 0.15,
            demographic: 0.10,
            preference: 0.10,
            semantic: 0.10,
            growth: 0.10,
        }
    }
}

impl CompatibilityWeights {
    /// Merge a partial override onto these weights
    pub fn merged(&self, overrides: &WeightOverrides) -> Self {
        Self {
            spiritual: overrides.spiritual.unwrap_or(self.spiritual),
            lifestyle: overrides.lifestyle.unwrap_or(self.lifestyle),
            psychological: overrides.psychological.unwrap_or(self.psychological),
            demographic: overrides.demographic.unwrap_or(self.demographic),
            preference: overrides.preference.unwrap_or(self.preference),
            semantic: overrides.semantic.unwrap_or(self.semantic),
            growth: overrides.growth.unwrap_or(self.growth),
        }
    }
}

/// Partial weight override supplied per request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightOverrides {
    #[serde(default)]
    pub spiritual: Option<f64>,
    #[serde(default)]
    pub lifestyle: Option<f64>,
    #[serde(default)]
    pub psychological: Option<f64>,
    #[serde(default)]
    pub demographic: Option<f64>,
    #[serde(default)]
    pub preference: Option<f64>,
    #[serde(default)]
    pub semantic: Option<f64>,
    #[serde(default)]
    pub growth: Option<f64>,
}

/// Rounded per-category scores (each 0-100)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub spiritual: u8,
    pub lifestyle: u8,
    pub psychological: u8,
    pub demographic: u8,
    pub preference: u8,
    pub semantic: u8,
    pub growth: u8,
}

/// Full compatibility verdict for one reference/candidate pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted total, 0-99 (never 100 by design)
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    pub breakdown: CategoryBreakdown,
    pub reasons: Vec<String>,
    pub concerns: Vec<String>,
    #[serde(rename = "uniqueStrengths")]
    pub unique_strengths: Vec<String>,
}

/// A candidate profile with its compatibility verdict and final adjusted score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub profile: Profile,
    pub compatibility: CompatibilityResult,
    /// Total after the quality/tier post-processing stage, 0-99
    #[serde(rename = "adjustedScore")]
    pub adjusted_score: u8,
}
