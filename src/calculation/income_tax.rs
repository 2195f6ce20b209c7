//! Progressive income tax calculation functionality.
//!
//! Each bracket taxes only the slice of taxable salary between the previous
//! bracket's upper bound and its own, at its marginal rate. The unbounded top
//! bracket absorbs whatever remains.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::TaxSlice;

/// The result of a progressive income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// Total income tax, the sum of every slice's tax.
    pub income_tax: Decimal,
    /// The slices actually reached by the taxable salary, lowest first.
    pub slices: Vec<TaxSlice>,
}

/// Calculates income tax on `taxable_salary` over ordered brackets.
///
/// The brackets are walked lowest first, carrying the amount still to be
/// allocated and the previous upper bound. The walk stops as soon as nothing
/// remains or the brackets run out, so a zero or negative taxable salary
/// produces no slices and no tax.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket { upper_bound: Some(Decimal::from(50_000)), rate: Decimal::ZERO },
///     TaxBracket { upper_bound: Some(Decimal::from(130_000)), rate: Decimal::new(10, 2) },
///     TaxBracket { upper_bound: None, rate: Decimal::new(15, 2) },
/// ];
///
/// let result = calculate_income_tax(Decimal::from(96_400), &brackets);
/// assert_eq!(result.income_tax, Decimal::from(4_640));
/// assert_eq!(result.slices.len(), 2);
/// ```
pub fn calculate_income_tax(taxable_salary: Decimal, brackets: &[TaxBracket]) -> IncomeTaxResult {
    let slices: Vec<TaxSlice> = brackets
        .iter()
        .scan(
            (taxable_salary, Decimal::ZERO),
            |(remaining, lower_bound), bracket| {
                if *remaining <= Decimal::ZERO {
                    return None;
                }

                let taxed_amount = match bracket.upper_bound {
                    Some(upper) => (*remaining).min(upper - *lower_bound),
                    None => *remaining,
                };

                let slice = TaxSlice {
                    lower_bound: *lower_bound,
                    upper_bound: bracket.upper_bound,
                    rate: bracket.rate,
                    taxed_amount,
                    tax: taxed_amount * bracket.rate,
                };

                *remaining -= taxed_amount;
                if let Some(upper) = bracket.upper_bound {
                    *lower_bound = upper;
                }
                Some(slice)
            },
        )
        .collect();

    let income_tax = slices.iter().map(|slice| slice.tax).sum();

    IncomeTaxResult { income_tax, slices }
}
