//! Schema validation for calling layers.
//!
//! The engine evaluates any structurally valid [`Exposure`] and recovers from
//! numeric defects on its own. Services that would rather reject a defective
//! record up front call [`Exposure::validate`] (first defect) or
//! [`Exposure::validation_errors`] (every defect, in field order).

use crate::types::{Exposure, ExposureError};

/// Upper bound of the LTV schema range, in percent.
pub const MAX_LTV: f64 = 200.0;

impl Exposure {
    /// Checks the numeric fields against their schema ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExposureError`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use capital_core::types::{CounterpartyCategory, Exposure, ExposureError, ProductCategory};
    ///
    /// let mut e = Exposure::new(ProductCategory::RealEstateLoan, CounterpartyCategory::Individual);
    /// e.real_estate.ltv = 80.0;
    /// assert!(e.validate().is_ok());
    ///
    /// e.real_estate.ltv = -1.0;
    /// assert_eq!(e.validate(), Err(ExposureError::LtvOutOfRange(-1.0)));
    /// ```
    pub fn validate(&self) -> Result<(), ExposureError> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collects every schema defect.
    pub fn validation_errors(&self) -> Vec<ExposureError> {
        let mut errors = Vec::new();

        let ltv = self.real_estate.ltv;
        if !ltv.is_finite() {
            errors.push(ExposureError::NonFinite {
                field: "real_estate.ltv",
            });
        } else if !(0.0..=MAX_LTV).contains(&ltv) {
            errors.push(ExposureError::LtvOutOfRange(ltv));
        }

        let provision = self.default_status.provision_percent;
        if !provision.is_finite() {
            errors.push(ExposureError::NonFinite {
                field: "default_status.provision_percent",
            });
        } else if !(0.0..=100.0).contains(&provision) {
            errors.push(ExposureError::ProvisionOutOfRange(provision));
        }

        if let Some(tenor) = self.retail.payroll_tenor_years {
            if !tenor.is_finite() {
                errors.push(ExposureError::NonFinite {
                    field: "retail.payroll_tenor_years",
                });
            } else if tenor < 0.0 {
                errors.push(ExposureError::NegativeTenor(tenor));
            }
        }

        let optional_weights = [
            ("fund.look_through_weight", self.fund.look_through_weight),
            ("crm.guarantor_weight", self.crm.guarantor_weight),
            ("crm.insurer_weight", self.crm.insurer_weight),
        ];
        for (field, value) in optional_weights {
            if value.is_some_and(|w| !w.is_finite()) {
                errors.push(ExposureError::NonFinite { field });
            }
        }

        for (index, posting) in self.crm.collateral.iter().enumerate() {
            if !posting.value.is_finite() || posting.value < 0.0 {
                errors.push(ExposureError::CollateralValue {
                    index,
                    value: posting.value,
                });
            }
        }

        if let Some(amounts) = &self.amounts {
            let balances = [
                ("amounts.drawn_balance", amounts.drawn_balance),
                ("amounts.undrawn_limit", amounts.undrawn_limit),
            ];
            for (field, value) in balances {
                if !value.is_finite() {
                    errors.push(ExposureError::NonFinite { field });
                } else if value < 0.0 {
                    errors.push(ExposureError::NegativeAmount { field, value });
                }
            }
            if let Some(ccf) = amounts.custom_ccf {
                if !ccf.is_finite() {
                    errors.push(ExposureError::NonFinite {
                        field: "amounts.custom_ccf",
                    });
                } else if !(0.0..=1.0).contains(&ccf) {
                    errors.push(ExposureError::CcfOutOfRange(ccf));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CcfKind, CollateralKind, CollateralPosting, CounterpartyCategory, Currency,
        ExposureAmounts, ProductCategory,
    };

    fn loan() -> Exposure {
        Exposure::new(ProductCategory::Loan, CounterpartyCategory::Corporate)
    }

    #[test]
    fn test_default_exposure_is_valid() {
        assert!(loan().validate().is_ok());
        assert!(Exposure::default().validation_errors().is_empty());
    }

    #[test]
    fn test_ltv_bounds_are_inclusive() {
        let mut e = loan();
        e.real_estate.ltv = 200.0;
        assert!(e.validate().is_ok());
        e.real_estate.ltv = 200.5;
        assert_eq!(e.validate(), Err(ExposureError::LtvOutOfRange(200.5)));
        e.real_estate.ltv = f64::NAN;
        assert_eq!(
            e.validate(),
            Err(ExposureError::NonFinite {
                field: "real_estate.ltv"
            })
        );
    }

    #[test]
    fn test_provision_range() {
        let mut e = loan();
        e.default_status.provision_percent = 100.0;
        assert!(e.validate().is_ok());
        e.default_status.provision_percent = 120.0;
        assert_eq!(e.validate(), Err(ExposureError::ProvisionOutOfRange(120.0)));
    }

    #[test]
    fn test_non_finite_optional_weights() {
        let mut e = loan();
        e.crm.guarantor_weight = Some(f64::INFINITY);
        e.fund.look_through_weight = Some(f64::NAN);
        let errors = e.validation_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            ExposureError::NonFinite {
                field: "fund.look_through_weight"
            }
        );
    }

    #[test]
    fn test_out_of_range_look_through_is_not_a_defect() {
        let mut e = loan();
        e.fund.look_through_weight = Some(2000.0);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_amount_defects_collected_in_order() {
        let amounts = ExposureAmounts::new(-10.0, f64::NAN, CcfKind::Other).with_custom_ccf(1.5);
        let errors = loan().with_amounts(amounts).validation_errors();
        assert_eq!(
            errors,
            vec![
                ExposureError::NegativeAmount {
                    field: "amounts.drawn_balance",
                    value: -10.0
                },
                ExposureError::NonFinite {
                    field: "amounts.undrawn_limit"
                },
                ExposureError::CcfOutOfRange(1.5),
            ]
        );
    }

    #[test]
    fn test_collateral_value_defect() {
        let mut e = loan();
        e.crm.collateral = vec![
            CollateralPosting::new(CollateralKind::Gold, Currency::BRL, 100.0),
            CollateralPosting::new(CollateralKind::Other, Currency::BRL, -5.0),
        ];
        assert_eq!(
            e.validate(),
            Err(ExposureError::CollateralValue {
                index: 1,
                value: -5.0
            })
        );
    }

    #[test]
    fn test_negative_payroll_tenor() {
        let mut e = Exposure::new(ProductCategory::Loan, CounterpartyCategory::Individual);
        e.retail.payroll_tenor_years = Some(-2.0);
        assert_eq!(e.validate(), Err(ExposureError::NegativeTenor(-2.0)));
    }
}
