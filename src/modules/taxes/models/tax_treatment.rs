use serde::{Deserialize, Serialize};

/// VAT treatment of a supply line
///
/// Zero-rated and exempt both produce no output tax, but they differ on
/// input-tax recovery: zero-rated supplies keep recovery eligibility,
/// exempt supplies do not. Reverse charge means the buyer self-assesses
/// instead of the supplier charging VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxTreatment {
    /// Subject to VAT at the jurisdiction's default rate
    StandardRated,

    /// Subject to VAT at 0%
    ZeroRated,

    /// Outside VAT scope; no output tax, no input recovery
    Exempt,

    /// Buyer self-assesses VAT; supplier charges none
    ReverseCharge,
}

impl TaxTreatment {
    /// Whether the supplier charges output tax on a line with this treatment
    pub fn charges_output_tax(&self) -> bool {
        !matches!(self, TaxTreatment::ReverseCharge)
    }

    /// Whether input VAT on a purchase line with this treatment is
    /// recoverable against output VAT
    pub fn input_tax_recoverable(&self) -> bool {
        matches!(self, TaxTreatment::StandardRated | TaxTreatment::ReverseCharge)
    }
}

impl Default for TaxTreatment {
    fn default() -> Self {
        TaxTreatment::StandardRated
    }
}

impl std::fmt::Display for TaxTreatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxTreatment::StandardRated => write!(f, "STANDARD_RATED"),
            TaxTreatment::ZeroRated => write!(f, "ZERO_RATED"),
            TaxTreatment::Exempt => write!(f, "EXEMPT"),
            TaxTreatment::ReverseCharge => write!(f, "REVERSE_CHARGE"),
        }
    }
}

impl std::str::FromStr for TaxTreatment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "STANDARD_RATED" => Ok(TaxTreatment::StandardRated),
            "ZERO_RATED" => Ok(TaxTreatment::ZeroRated),
            "EXEMPT" => Ok(TaxTreatment::Exempt),
            "REVERSE_CHARGE" => Ok(TaxTreatment::ReverseCharge),
            _ => Err(format!("Invalid tax treatment: {}", s)),
        }
    }
}
