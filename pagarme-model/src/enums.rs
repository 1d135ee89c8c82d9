//! Typed enums of the Pagar.me domain and their string tables.

use crate::coerce::coerce_enum;
use crate::error::ModelResult;
use crate::schema::EnumTable;
use crate::value::{EnumValue, Value};

/// A Rust enum backed by a declared [`EnumTable`].
pub trait ModelEnum: Sized + Copy + 'static {
    const TABLE: &'static EnumTable;

    /// External string representation.
    fn as_str(&self) -> &'static str;

    /// Parses an exact, case-sensitive member name.
    fn from_member(member: &str) -> Option<Self>;

    fn to_value(self) -> Value {
        Value::Enum(EnumValue {
            table: Self::TABLE,
            member: self.as_str(),
        })
    }

    /// Reads the enum back from a stored value.
    ///
    /// Accepts enum values and plain strings naming a member of
    /// [`Self::TABLE`]. Null reads as `None`.
    fn from_value(value: &Value) -> ModelResult<Option<Self>> {
        match coerce_enum(Self::TABLE, value.clone())? {
            Value::Enum(e) => Ok(Self::from_member(e.member)),
            _ => Ok(None),
        }
    }
}

/// Declares a [`ModelEnum`] and its [`EnumTable`] from one member list.
macro_rules! model_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $table:ident = $table_name:literal {
            $($variant:ident => $member:literal),+ $(,)?
        }
    ) => {
        pub(crate) static $table: EnumTable = EnumTable {
            name: $table_name,
            members: &[$($member),+],
        };

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl ModelEnum for $name {
            const TABLE: &'static EnumTable = &$table;

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $member),+
                }
            }

            fn from_member(member: &str) -> Option<Self> {
                match member {
                    $($member => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$name> for Value {
            fn from(e: $name) -> Self {
                e.to_value()
            }
        }
    };
}

model_enum! {
    /// How a transaction is paid.
    PaymentMethod, PAYMENT_METHOD = "PaymentMethod" {
        CreditCard => "credit_card",
        Boleto => "boleto",
    }
}

model_enum! {
    /// Lifecycle state of a transaction.
    TransactionStatus, TRANSACTION_STATUS = "TransactionStatus" {
        Processing => "processing",
        Authorized => "authorized",
        Paid => "paid",
        Refunded => "refunded",
        WaitingPayment => "waiting_payment",
        PendingRefund => "pending_refund",
        Refused => "refused",
    }
}

model_enum! {
    /// Lifecycle state of a subscription.
    SubscriptionStatus, SUBSCRIPTION_STATUS = "SubscriptionStatus" {
        Trialing => "trialing",
        Paid => "paid",
        PendingPayment => "pending_payment",
        Unpaid => "unpaid",
        Canceled => "canceled",
        Ended => "ended",
    }
}

model_enum! {
    /// Card network.
    CardBrand, CARD_BRAND = "CardBrand" {
        Amex => "amex",
        Aura => "aura",
        Diners => "diners",
        Discover => "discover",
        Elo => "elo",
        Hipercard => "hipercard",
        Jcb => "jcb",
        Mastercard => "mastercard",
        Visa => "visa",
    }
}
