use super::{cents, CheckInput};
use crate::workflows::anlage_v::form::FieldCode;
use crate::workflows::anlage_v::report::Finding;

/// Absent income and expenses count as zero.
pub(super) fn expense_income_ratio(input: &CheckInput<'_>) -> Option<Finding> {
    let income = input.form.amount_or_zero(FieldCode::ReportedIncome);
    let expenses = input.form.amount_or_zero(FieldCode::ReportedExpenses);
    let multiplier = input.config.expense_income_multiplier;

    if expenses <= income * multiplier {
        return None;
    }

    Some(
        Finding::warning(
            FieldCode::ReportedExpenses,
            format!("Werbungskosten übersteigen das {multiplier:.0}-Fache der Einnahmen"),
        )
        .actual(expenses)
        .detail(format!(
            "Einnahmen {income:.2} EUR, Werbungskosten {expenses:.2} EUR."
        ))
        .hint("Dauerhafte Verluste können eine Prüfung der Einkünfteerzielungsabsicht auslösen; Belege bereithalten."),
    )
}

pub(super) fn utility_share(input: &CheckInput<'_>) -> Option<Finding> {
    let utilities = input.form.positive_amount(FieldCode::UtilityCosts)?;
    let income = input.form.amount_or_zero(FieldCode::ReportedIncome);

    if utilities <= income * input.config.utility_share_limit {
        return None;
    }

    let mut finding = Finding::warning(
        FieldCode::UtilityCosts,
        format!(
            "Nebenkosten über {:.0} % der Einnahmen",
            input.config.utility_share_limit * 100.0
        ),
    )
    .hint("Üblich sind 15–25 % der Mieteinnahmen; Umlageschlüssel und Abrechnung prüfen.");

    finding = if income > 0.0 {
        let share = utilities / income * 100.0;
        finding
            .actual(cents(share))
            .detail(format!("Nebenkosten entsprechen {share:.1} % der Einnahmen."))
    } else {
        finding.detail(format!(
            "Nebenkosten von {utilities:.2} EUR ohne erfasste Einnahmen."
        ))
    };

    Some(finding)
}

/// Only a shortfall counts; receiving more than contracted is not flagged.
pub(super) fn rent_shortfall(input: &CheckInput<'_>) -> Option<Finding> {
    let contracted = input.form.positive_amount(FieldCode::ContractedRent)?;
    let received = input.form.amount(FieldCode::ActualRentReceived)?;

    let shortfall = contracted - received;
    if shortfall <= contracted * input.config.rent_shortfall_tolerance {
        return None;
    }

    Some(
        Finding::warning(
            FieldCode::ActualRentReceived,
            "Vereinnahmte Miete liegt deutlich unter der vereinbarten Miete",
        )
        .expected(contracted)
        .actual(received)
        .impact(format!("Mietausfall von {:.2} EUR", cents(shortfall)))
        .action("Mietrückstände, Leerstand oder Mietminderung dokumentieren."),
    )
}

pub(super) fn large_maintenance(input: &CheckInput<'_>) -> Option<Finding> {
    let amount = input.form.positive_amount(FieldCode::MaintenanceExpense)?;
    let threshold = input.config.maintenance_threshold;

    if amount <= threshold {
        return None;
    }

    Some(
        Finding::warning(
            FieldCode::MaintenanceExpense,
            "Hohe Erhaltungsaufwendungen in einem Jahr",
        )
        .actual(amount)
        .detail(format!(
            "{amount:.2} EUR übersteigen die Schwelle von {threshold:.0} EUR."
        ))
        .action(format!(
            "Verteilung auf bis zu 5 Jahre erwägen (§ 82b EStDV, Zeile {}).",
            FieldCode::MaintenanceSpread.line()
        )),
    )
}
