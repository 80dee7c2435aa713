use crate::{model::PapersConfigV1, model::SCHEMA_CONFIG_V1, presets};
use anyhow::Context;
use papers_domain::policy::{EffectiveConfig, UnknownCountryPolicy, UnknownTransitPolicy};
use time::Date;
use time::macros::format_description;

/// Command-line values that win over both the profile and the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub as_of: Option<String>,
    pub parallel: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: PapersConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    if let Some(home) = cfg.home_country.as_deref() {
        let home = home.trim();
        if home.is_empty() {
            anyhow::bail!("home_country must not be empty");
        }
        effective.home_country = home.to_ascii_uppercase();
    }

    if let Some(v) = cfg.unknown_country.as_deref() {
        effective.unknown_country = parse_unknown_country(v)?;
    }
    if let Some(v) = cfg.unknown_transit_country.as_deref() {
        effective.unknown_transit_country = parse_unknown_transit(v)?;
    }

    // 0 turns the window off.
    if let Some(days) = cfg.visa_max_age_days {
        effective.visa_max_age_days = (days > 0).then_some(days);
    }

    if let Some(check) = cfg.check_passport_format {
        effective.check_passport_format = check;
    }

    if let Some(as_of) = overrides.as_of.as_deref().or(cfg.as_of.as_deref()) {
        effective.as_of = Some(parse_as_of(as_of).context("invalid as_of")?);
    }

    if let Some(parallel) = overrides.parallel.or(cfg.parallel) {
        effective.parallel = parallel;
    }

    Ok(ResolvedConfig { effective })
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_as_of(v: &str) -> anyhow::Result<Date> {
    Date::parse(v.trim(), format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("expected YYYY-MM-DD, got '{v}'"))
}

fn parse_unknown_country(v: &str) -> anyhow::Result<UnknownCountryPolicy> {
    match v {
        "error" => Ok(UnknownCountryPolicy::Error),
        "reject" => Ok(UnknownCountryPolicy::Reject),
        "cleared" | "clear" => Ok(UnknownCountryPolicy::Cleared),
        other => {
            anyhow::bail!("unknown unknown_country policy: {other} (expected error|reject|cleared)")
        }
    }
}

fn parse_unknown_transit(v: &str) -> anyhow::Result<UnknownTransitPolicy> {
    match v {
        "cleared" | "clear" => Ok(UnknownTransitPolicy::Cleared),
        "quarantine" => Ok(UnknownTransitPolicy::Quarantine),
        other => anyhow::bail!(
            "unknown unknown_transit_country policy: {other} (expected cleared|quarantine)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use time::macros::date;

    #[test]
    fn empty_config_resolves_to_standard() {
        let resolved = resolve_config(PapersConfigV1::default(), Overrides::default()).expect("ok");
        let eff = resolved.effective;
        assert_eq!(eff.profile, "standard");
        assert_eq!(eff.home_country, "KAN");
        assert_eq!(eff.unknown_country, UnknownCountryPolicy::Error);
        assert_eq!(eff.unknown_transit_country, UnknownTransitPolicy::Cleared);
        assert_eq!(eff.visa_max_age_days, Some(730));
        assert!(!eff.check_passport_format);
        assert_eq!(eff.as_of, None);
        assert!(eff.parallel);
    }

    #[test]
    fn strict_and_legacy_presets() {
        let strict = presets::preset("strict").expect("strict");
        assert_eq!(strict.unknown_country, UnknownCountryPolicy::Reject);
        assert_eq!(
            strict.unknown_transit_country,
            UnknownTransitPolicy::Quarantine
        );
        assert!(strict.check_passport_format);

        let legacy = presets::preset("legacy").expect("legacy");
        assert_eq!(legacy.unknown_country, UnknownCountryPolicy::Cleared);
        assert_eq!(legacy.visa_max_age_days, None);
    }

    #[test]
    fn file_values_override_profile_and_cli_overrides_file() {
        let cfg = parse_config_toml(
            r#"
            profile = "legacy"
            home_country = "arstotzka"
            unknown_transit_country = "quarantine"
            visa_max_age_days = 0
            as_of = "2020-01-01"
            parallel = false
            "#,
        )
        .expect("parse");

        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: Some("strict".to_string()),
                as_of: Some("2024-06-01".to_string()),
                parallel: None,
            },
        )
        .expect("resolve");
        let eff = resolved.effective;

        assert_eq!(eff.profile, "strict");
        assert_eq!(eff.home_country, "ARSTOTZKA");
        assert_eq!(eff.unknown_transit_country, UnknownTransitPolicy::Quarantine);
        assert_eq!(eff.visa_max_age_days, None);
        assert_eq!(eff.as_of, Some(date!(2024 - 06 - 01)));
        assert!(!eff.parallel);
    }

    #[test]
    fn invalid_values_are_errors() {
        let bad_profile = Overrides {
            profile: Some("lenient".to_string()),
            ..Overrides::default()
        };
        let err = resolve_config(PapersConfigV1::default(), bad_profile).expect_err("profile");
        assert!(err.to_string().contains("unknown profile"));

        let cases = [
            r#"unknown_country = "maybe""#,
            r#"unknown_transit_country = "reject""#,
            r#"home_country = "  ""#,
            r#"as_of = "June 1st""#,
            r#"schema = "papers.config.v9""#,
        ];
        for input in cases {
            let cfg = parse_config_toml(input).expect("parse");
            assert!(
                resolve_config(cfg, Overrides::default()).is_err(),
                "{input}"
            );
        }
    }

    #[test]
    fn unknown_keys_are_rejected_at_parse_time() {
        assert!(parse_config_toml("max_findings = 3").is_err());
    }
}
