use crate::test_data::UserRecord;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A registered account, reduced to what the fixture needs to answer the
/// account API and render the logged-in navbar.
#[derive(Clone, Debug)]
pub struct StoredUser {
    pub name: String,
    pub firstname: String,
    pub password: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: String,
}

/// In-memory stores backing the fixture. One instance per spawned app, so
/// parallel scenarios never observe each other's accounts or sessions.
#[derive(Clone)]
pub struct StoreState {
    users: Arc<RwLock<HashMap<String, StoredUser>>>,
    sessions: Arc<RwLock<HashMap<String, String>>>,
    catalog: Arc<Vec<Product>>,
}

const BRANDS: [&str; 8] = [
    "Polo",
    "H&M",
    "Madame",
    "Mast & Harbour",
    "Babyhug",
    "Allen Solly Junior",
    "Kookie Kids",
    "Biba",
];

const STYLES: [&str; 12] = [
    "Blue Top",
    "Men Tshirt",
    "Sleeveless Dress",
    "Stylish Dress",
    "Winter Top",
    "Summer White Top",
    "Cotton Shirt",
    "Printed Kurti",
    "Slim Fit Jeans",
    "Half Sleeve Polo",
    "Hooded Jacket",
    "Graphic Tee",
];

const CATEGORIES: [&str; 3] = ["Women > Tops", "Men > Tshirts", "Kids > Dress"];

// Comfortably above the 30-product threshold the products scenario asserts.
const CATALOG_SIZE: usize = 34;

impl StoreState {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            catalog: Arc::new(build_catalog()),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn brands(&self) -> Vec<&'static str> {
        BRANDS.to_vec()
    }

    /// Register an account; `false` when the email is already taken.
    pub fn register(&self, record: &UserRecord) -> bool {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&record.email) {
            return false;
        }
        users.insert(
            record.email.clone(),
            StoredUser {
                name: record.name.clone(),
                firstname: record.firstname.clone(),
                password: record.password.clone(),
            },
        );
        true
    }

    pub fn credentials_valid(&self, email: &str, password: &str) -> bool {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(email)
            .is_some_and(|user| user.password == password)
    }

    /// Remove the account when the credentials match; `false` otherwise.
    pub fn delete_user(&self, email: &str, password: &str) -> bool {
        if !self.credentials_valid(email, password) {
            return false;
        }
        self.users
            .write()
            .expect("user store lock poisoned")
            .remove(email)
            .is_some()
    }

    pub fn create_session(&self, email: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), email.to_string());
        token
    }

    pub fn session_user(&self, token: &str) -> Option<StoredUser> {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        let email = sessions.get(token)?;
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(email)
            .cloned()
    }

    pub fn remove_session(&self, token: &str) {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(token);
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

fn build_catalog() -> Vec<Product> {
    (0..CATALOG_SIZE)
        .map(|i| Product {
            id: (i + 1) as u32,
            name: format!("{} #{:02}", STYLES[i % STYLES.len()], i + 1),
            price: format!("Rs. {}", 300 + i * 50),
            brand: BRANDS[i % BRANDS.len()].to_string(),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
        })
        .collect()
}
