//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Sums this [`Money`] with the `other` one.
    ///
    /// [`None`] is returned if the [`Currency`]s differ.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency).then(|| Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Brazilian Real."]
        Brl = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("850000BRL").unwrap(),
            Money {
                amount: decimal("850000"),
                currency: Currency::Brl,
            },
        );

        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Eur,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Br").is_err());
        assert!(Money::from_str("123.45Brlreal").is_err());

        assert!(Money::from_str("123.00BRL").is_ok());
        assert!(Money::from_str("123.0BRL").is_ok());
        assert!(Money::from_str("123BRL").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money {
                amount: decimal("123.45"),
                currency: Currency::Brl,
            }
            .to_string(),
            "123.45BRL",
        );

        assert_eq!(
            Money {
                amount: decimal("123.00"),
                currency: Currency::Brl,
            }
            .to_string(),
            "123BRL",
        );

        assert_eq!(
            Money {
                amount: decimal("123.0"),
                currency: Currency::Usd,
            }
            .to_string(),
            "123USD",
        );

        assert_eq!(
            Money {
                amount: decimal("123"),
                currency: Currency::Eur,
            }
            .to_string(),
            "123EUR",
        );
    }

    #[test]
    fn checked_add() {
        let brl = |s: &str| Money {
            amount: decimal(s),
            currency: Currency::Brl,
        };

        assert_eq!(
            brl("12000").checked_add(brl("8500.50")),
            Some(brl("20500.50")),
        );

        assert_eq!(
            brl("12000").checked_add(Money {
                amount: decimal("1"),
                currency: Currency::Usd,
            }),
            None,
        );
    }
}
