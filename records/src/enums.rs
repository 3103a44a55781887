use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Dispatcher,
    Support,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Manager => write!(f, "Manager"),
            Role::Dispatcher => write!(f, "Dispatcher"),
            Role::Support => write!(f, "Support"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "dispatcher" => Ok(Role::Dispatcher),
            "support" => Ok(Role::Support),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Suspended,
    Invited,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Suspended => write!(f, "Suspended"),
            AccountStatus::Invited => write!(f, "Invited"),
        }
    }
}

impl FromStr for AccountStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "suspended" => Ok(AccountStatus::Suspended),
            "invited" => Ok(AccountStatus::Invited),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum VehicleClass {
    Auto,
    Mini,
    Sedan,
    Suv,
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleClass::Auto => write!(f, "Auto"),
            VehicleClass::Mini => write!(f, "Mini"),
            VehicleClass::Sedan => write!(f, "Sedan"),
            VehicleClass::Suv => write!(f, "SUV"),
        }
    }
}

impl FromStr for VehicleClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(VehicleClass::Auto),
            "mini" => Ok(VehicleClass::Mini),
            "sedan" => Ok(VehicleClass::Sedan),
            "suv" => Ok(VehicleClass::Suv),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum TxType {
    Credit,
    Debit,
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxType::Credit => write!(f, "Credit"),
            TxType::Debit => write!(f, "Debit"),
        }
    }
}

impl FromStr for TxType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(TxType::Credit),
            "debit" => Ok(TxType::Debit),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
    Wallet,
    Upi,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Wallet => write!(f, "Wallet"),
            PaymentMethod::Upi => write!(f, "UPI"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" | "credit card" | "debit card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            "upi" => Ok(PaymentMethod::Upi),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStatus::Completed => write!(f, "Completed"),
            TxStatus::Pending => write!(f, "Pending"),
            TxStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl FromStr for TxStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" | "success" => Ok(TxStatus::Completed),
            "pending" | "in progress" => Ok(TxStatus::Pending),
            "failed" => Ok(TxStatus::Failed),
            _ => Err(()),
        }
    }
}
