use super::{cents, CheckInput};
use crate::workflows::anlage_v::form::FieldCode;
use crate::workflows::anlage_v::property::{NEW_BUILD_AFA_RATE, STANDARD_AFA_RATE};
use crate::workflows::anlage_v::report::Finding;

/// New builds qualify for 3 % linear AfA; a missing AfA entry reads as 0 %.
pub(super) fn accelerated_afa(input: &CheckInput<'_>) -> Option<Finding> {
    let property = input.property.filter(|property| property.is_new_build())?;
    let basis = property.depreciable_basis()?;

    let reported = input.form.amount_or_zero(FieldCode::ReportedDepreciation);
    let implied_rate = reported / basis * 100.0;
    if implied_rate >= NEW_BUILD_AFA_RATE {
        return None;
    }

    let saving = basis * ((NEW_BUILD_AFA_RATE - STANDARD_AFA_RATE) / 100.0);

    Some(
        Finding::info(
            FieldCode::ReportedDepreciation,
            "Erhöhte AfA von 3 % für Neubauten möglich",
        )
        .actual(cents(implied_rate))
        .impact(format!("Mögliche zusätzliche AfA: {saving:.2} EUR pro Jahr"))
        .hint("Für ab 2023 fertiggestellte Wohngebäude beträgt die lineare AfA 3 % (§ 7 Abs. 4 EStG)."),
    )
}

pub(super) fn special_depreciation(input: &CheckInput<'_>) -> Option<Finding> {
    if input.form.is_filled(FieldCode::SpecialDepreciation) {
        return None;
    }

    let property = input.property?;
    if !(property.is_new_build() && property.is_residential()) {
        return None;
    }

    Some(
        Finding::info(
            FieldCode::SpecialDepreciation,
            "Sonderabschreibung für Mietwohnungsneubau prüfen",
        )
        .hint("Nach § 7b EStG sind zusätzlich bis zu 5 % jährlich über vier Jahre möglich, wenn die Baukostenobergrenze eingehalten wird."),
    )
}

/// Two-thirds rule: below the ratio, expenses are only deductible in proportion.
pub(super) fn below_market_rent(input: &CheckInput<'_>) -> Option<Finding> {
    let annual_rent = input.form.positive_amount(FieldCode::BelowMarketRent)?;
    let property = input.property?;
    let reference = input
        .market_rent
        .monthly_rent(property)
        .filter(|rent| *rent > 0.0)?;

    let ratio = input.config.below_market_ratio;
    let monthly_rent = annual_rent / 12.0;
    if monthly_rent >= reference * ratio {
        return None;
    }

    Some(
        Finding::info(
            FieldCode::BelowMarketRent,
            format!(
                "Miete liegt unter {:.0} % der ortsüblichen Vergleichsmiete",
                ratio * 100.0
            ),
        )
        .expected(cents(reference))
        .actual(cents(monthly_rent))
        .detail(format!(
            "Vereinbart {:.2} EUR/Monat, Vergleichsmiete ca. {:.2} EUR/Monat ({:.0} %).",
            monthly_rent,
            reference,
            monthly_rent / reference * 100.0
        ))
        .action("Werbungskosten in den Zeilen 33 bis 50 anteilig kürzen (§ 21 Abs. 2 EStG)."),
    )
}

pub(super) fn interest_only(input: &CheckInput<'_>) -> Option<Finding> {
    input.form.positive_amount(FieldCode::MortgageInterest)?;

    Some(
        Finding::info(
            FieldCode::MortgageInterest,
            "Nur Schuldzinsen sind als Werbungskosten abziehbar",
        )
        .hint("Tilgungsanteile der Darlehensraten gehören nicht in Zeile 47."),
    )
}
