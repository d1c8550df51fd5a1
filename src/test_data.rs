use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, SecondaryAddress, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

const TITLES: [&str; 3] = ["Mr", "Mrs", "Miss"];

/// The full signup payload expected by the account-creation endpoint.
///
/// Birth fields are kept as strings because that is how the form encodes them
/// on the wire.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub title: String,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
}

impl UserRecord {
    /// Produce an independently randomized record. Infallible and side-effect
    /// free; no uniqueness is guaranteed across invocations.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let firstname: String = FirstName().fake();
        let lastname: String = LastName().fake();
        Self {
            name: format!("{firstname} {lastname}"),
            email: SafeEmail().fake::<String>().to_lowercase(),
            password: Password(10..11).fake(),
            title: TITLES[rng.gen_range(0..TITLES.len())].to_string(),
            birth_date: rng.gen_range(1..=28).to_string(),
            birth_month: rng.gen_range(1..=12).to_string(),
            birth_year: rng.gen_range(1950..=2000).to_string(),
            firstname,
            lastname,
            company: CompanyName().fake(),
            address1: format!(
                "{} {}",
                BuildingNumber().fake::<String>(),
                StreetName().fake::<String>()
            ),
            address2: SecondaryAddress().fake(),
            country: "United States".to_string(),
            zipcode: ZipCode().fake(),
            state: StateName().fake(),
            city: CityName().fake(),
            mobile_number: PhoneNumber().fake(),
        }
    }
}
