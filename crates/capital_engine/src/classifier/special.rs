//! Groups that precede any counterparty rule: default, other-asset carve-outs
//! and special regulatory overrides.

use super::ClassificationResult;
use capital_core::tables::{
    default_weight, equity_weight, other_asset_weight, special_tier_weight,
    NEGATIVE_EQUITY_ADJUSTMENT_WEIGHT, SUBORDINATED_WEIGHT,
};
use capital_core::types::{ClassificationLabel, Exposure, OtherAssetKind, ProductCategory};

pub(super) fn default_override(exposure: &Exposure) -> Option<ClassificationResult> {
    let status = &exposure.default_status;
    if !status.in_default {
        return None;
    }

    let (provision, note) = if status.provision_percent.is_finite() {
        (status.provision_percent, None)
    } else {
        (
            0.0,
            Some("Provision percent is not a finite number; treated as 0%"),
        )
    };

    let weight = default_weight(provision);
    let label = if provision >= 50.0 {
        ClassificationLabel::DefaultHighProvision
    } else if provision >= 20.0 {
        ClassificationLabel::DefaultMediumProvision
    } else {
        ClassificationLabel::DefaultLowProvision
    };

    let mut result = ClassificationResult {
        weight,
        label,
        trail: Vec::new(),
    };
    if let Some(note) = note {
        result = result.with_note(note);
    }
    Some(result.with_note(format!(
        "Exposure in default, provision {provision}% ⇒ {weight}% (overrides all other rules)"
    )))
}

pub(super) fn other_asset(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.product != ProductCategory::Other {
        return None;
    }
    let kind = exposure.other_asset?;
    let weight = other_asset_weight(kind);
    let (label, name) = match kind {
        OtherAssetKind::Cash => (ClassificationLabel::Cash, "cash"),
        OtherAssetKind::Gold => (ClassificationLabel::Gold, "gold"),
        OtherAssetKind::ListedEquity => (ClassificationLabel::ListedEquity, "listed equity"),
        OtherAssetKind::UnlistedEquity => (ClassificationLabel::UnlistedEquity, "unlisted equity"),
        OtherAssetKind::FixedAsset => (ClassificationLabel::FixedAsset, "fixed asset"),
        OtherAssetKind::Other => (ClassificationLabel::OtherAsset, "other asset"),
    };
    Some(ClassificationResult::new(
        weight,
        label,
        format!("Other exposure: {name} ⇒ {weight}%"),
    ))
}

pub(super) fn regulatory_override(exposure: &Exposure) -> Option<ClassificationResult> {
    let special = &exposure.special;

    if special.negative_equity_adjustment {
        return Some(ClassificationResult::new(
            NEGATIVE_EQUITY_ADJUSTMENT_WEIGHT,
            ClassificationLabel::NegativeEquityAdjustment,
            format!("Negative equity adjustment ⇒ {NEGATIVE_EQUITY_ADJUSTMENT_WEIGHT}%"),
        ));
    }
    if special.subordinated {
        return Some(ClassificationResult::new(
            SUBORDINATED_WEIGHT,
            ClassificationLabel::Subordinated,
            format!("Subordinated instrument ⇒ {SUBORDINATED_WEIGHT}%"),
        ));
    }
    if let Some(weight) = equity_weight(special.equity) {
        return Some(ClassificationResult::new(
            weight,
            ClassificationLabel::Equity,
            format!("Equity participation ⇒ {weight}%"),
        ));
    }
    if let Some(weight) = special_tier_weight(special.tax_credit) {
        return Some(ClassificationResult::new(
            weight,
            ClassificationLabel::TaxCredit,
            format!("Tax credit ⇒ {weight}%"),
        ));
    }
    if let Some(weight) = special_tier_weight(special.receivables) {
        return Some(ClassificationResult::new(
            weight,
            ClassificationLabel::Receivables,
            format!("Court-ordered receivables ⇒ {weight}%"),
        ));
    }
    None
}
