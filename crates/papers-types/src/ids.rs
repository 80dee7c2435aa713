//! Stable identifiers for admission rules and outcome codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules, in evaluation order.
pub const RULE_COMPLETENESS: &str = "admission.completeness";
pub const RULE_MEDICAL_ADVISORY: &str = "admission.medical_advisory";
pub const RULE_WATCHLIST: &str = "admission.watchlist";
pub const RULE_ELIGIBILITY: &str = "admission.eligibility";

// Codes: admission.completeness
pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_MALFORMED_BIRTH_DATE: &str = "malformed_birth_date";
pub const CODE_MALFORMED_PASSPORT: &str = "malformed_passport";

// Codes: admission.medical_advisory
pub const CODE_ORIGIN_ADVISORY: &str = "origin_advisory";
pub const CODE_TRANSIT_ADVISORY: &str = "transit_advisory";
pub const CODE_UNKNOWN_TRANSIT_COUNTRY: &str = "unknown_transit_country";

// Codes: admission.watchlist
pub const CODE_PASSPORT_MATCH: &str = "passport_match";
pub const CODE_NAME_MATCH: &str = "name_match";

// Codes: admission.eligibility
pub const CODE_RETURNING_RESIDENT: &str = "returning_resident";
pub const CODE_VISA_NOT_REQUIRED: &str = "visa_not_required";
pub const CODE_VISA_VALID: &str = "visa_valid";
pub const CODE_VISA_MISSING: &str = "visa_missing";
pub const CODE_VISA_MALFORMED_DATE: &str = "visa_malformed_date";
pub const CODE_VISA_EXPIRED: &str = "visa_expired";

// Shared by the medical advisory and eligibility rules under the `reject` policy.
pub const CODE_UNKNOWN_COUNTRY: &str = "unknown_country";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
