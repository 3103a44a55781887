//! Common test fixtures for the ridedesk-records crate

#![allow(dead_code)]

pub const USER_CSV: &str = r#"User ID,Full Name,Email,Phone,Role,Status,City,Joined
U001,Rajesh Kumar,rajesh@example.com,+91 98200 11111,Admin,Active,Mumbai,2024-11-02
U002,Anita Desai,anita@example.com,+91 98200 22222,Manager,Active,Pune,2025-01-15
U003,Vikram Singh,vikram@example.com,+91 98200 33333,Dispatcher,Suspended,Mumbai,2025-02-20
U004,Meera Nair,meera@example.com,+91 98200 44444,Support,Invited,Kochi,2025-03-14"#;

/// Same as USER_CSV plus one row with an unknown role, which parsing skips
pub const USER_CSV_WITH_INVALID: &str = r#"User ID,Full Name,Email,Phone,Role,Status,City,Joined
U001,Rajesh Kumar,rajesh@example.com,+91 98200 11111,Admin,Active,Mumbai,2024-11-02
U002,Anita Desai,anita@example.com,+91 98200 22222,Manager,Active,Pune,2025-01-15
U005,Broken Row,broken@example.com,+91 98200 55555,Wizard,Active,Delhi,2025-04-01
U003,Vikram Singh,vikram@example.com,+91 98200 33333,Dispatcher,Suspended,Mumbai,2025-02-20"#;

pub const TRANSACTION_CSV: &str = r#"Transaction ID,Driver Name,Vehicle Class,Type,Payment Method,Amount,Status,Date,Time Slot
TX1001,Ramesh Gupta,Sedan,Credit,UPI,"₹45,000",Completed,2025-03-14,05:00 AM - 07:00 AM
TX1002,Suresh Yadav,Mini,Debit,Cash,30,Completed,2025-03-14,09:00 AM - 11:00 AM
TX1003,Mahesh Patil,SUV,Credit,Card,"₹1,250",Pending,2025-03-15,06:30 PM - 08:00 PM
TX1004,Dinesh Rao,Auto,Credit,Wallet,510,Failed,2025-04-01,10:00 PM - 02:00 AM"#;

/// TRANSACTION_CSV with the first row repeated at the end
pub const TRANSACTION_CSV_WITH_DUP: &str = r#"Transaction ID,Driver Name,Vehicle Class,Type,Payment Method,Amount,Status,Date,Time Slot
TX1001,Ramesh Gupta,Sedan,Credit,UPI,"₹45,000",Completed,2025-03-14,05:00 AM - 07:00 AM
TX1002,Suresh Yadav,Mini,Debit,Cash,30,Completed,2025-03-14,09:00 AM - 11:00 AM
TX1003,Mahesh Patil,SUV,Credit,Card,"₹1,250",Pending,2025-03-15,06:30 PM - 08:00 PM
TX1004,Dinesh Rao,Auto,Credit,Wallet,510,Failed,2025-04-01,10:00 PM - 02:00 AM
TX1001,Ramesh Gupta,Sedan,Credit,UPI,"₹45,000",Completed,2025-03-14,05:00 AM - 07:00 AM"#;

pub const FARE_RULE_CSV: &str = r#"Rule ID,Label,Vehicle Class,Day,Time Slot,Base Fare,Per Km,Per Minute,Surge Multiplier,Active
FR01,Weekday morning peak,Sedan,Monday,07:00 AM - 10:00 AM,90,14,2,1.5,true
FR02,Night surcharge,SUV,Saturday,10:00 PM - 06:00 AM,150,18,2.5,1.8,true
FR03,Off-peak standard,Mini,Tuesday,11:00 AM - 04:00 PM,60,11,1.5,1,false"#;
