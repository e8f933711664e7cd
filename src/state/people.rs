// Seeded person directory for the directory server

use serde::{Deserialize, Serialize};

/// One record in the person directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Unique identifier (UUID string)
    pub id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Year of graduation
    pub graduation_year: u32,
    /// Street address
    pub address: String,
    /// City of residence
    pub city: String,
    /// Postal code
    pub zip: String,
    /// Country of residence
    pub country: String,
    /// Avatar image URL
    pub avatar: String,
}

/// In-memory person directory
///
/// Starts out seeded with the course's five sample records. Records can be
/// appended and removed but never edited in place.
#[derive(Debug, Clone)]
pub struct PeopleDirectory {
    people: Vec<Person>,
}

impl PeopleDirectory {
    /// Directory preloaded with the sample data set
    pub fn seeded() -> Self {
        Self {
            people: sample_people(),
        }
    }

    /// Empty directory
    pub fn empty() -> Self {
        Self { people: Vec::new() }
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// First person whose first name contains `query`, case-insensitively
    pub fn search_first_name(&self, query: &str) -> Option<&Person> {
        let query = query.to_lowercase();
        self.people
            .iter()
            .find(|person| person.first_name.to_lowercase().contains(&query))
    }

    /// Person with the given id, if any
    pub fn find(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// Remove the person with the given id, returning the removed record
    pub fn remove(&mut self, id: &str) -> Option<Person> {
        let index = self.people.iter().position(|person| person.id == id)?;
        Some(self.people.remove(index))
    }

    /// Append a record to the directory
    pub fn add(&mut self, person: Person) {
        self.people.push(person);
    }
}

/// The five sample records the course labs ship with
fn sample_people() -> Vec<Person> {
    vec![
        Person {
            id: "3b58aade-8415-49dd-88db-8d7bce14932a".to_string(),
            first_name: "Tanya".to_string(),
            last_name: "Slad".to_string(),
            graduation_year: 1996,
            address: "043 Heath Hill".to_string(),
            city: "Dayton".to_string(),
            zip: "45426".to_string(),
            country: "United States".to_string(),
            avatar: "http://dummyimage.com/139x100.png/cc0000/ffffff".to_string(),
        },
        Person {
            id: "d64efd92-ca8e-40da-b234-47e6403eb167".to_string(),
            first_name: "Ferdy".to_string(),
            last_name: "Garrow".to_string(),
            graduation_year: 1970,
            address: "10 Wayridge Terrace".to_string(),
            city: "North Little Rock".to_string(),
            zip: "72199".to_string(),
            country: "United States".to_string(),
            avatar: "http://dummyimage.com/148x100.png/dddddd/000000".to_string(),
        },
        Person {
            id: "66c09925-589a-43b6-9a5d-d1601cf53287".to_string(),
            first_name: "Lilla".to_string(),
            last_name: "Aupol".to_string(),
            graduation_year: 1985,
            address: "637 Carey Pass".to_string(),
            city: "Gainesville".to_string(),
            zip: "32627".to_string(),
            country: "United States".to_string(),
            avatar: "http://dummyimage.com/174x100.png/ff4444/ffffff".to_string(),
        },
        Person {
            id: "0dd63e57-0b5f-44bc-94ae-5c1b4947cb49".to_string(),
            first_name: "Abdel".to_string(),
            last_name: "Duke".to_string(),
            graduation_year: 1995,
            address: "2 Lake View Point".to_string(),
            city: "Shreveport".to_string(),
            zip: "71105".to_string(),
            country: "United States".to_string(),
            avatar: "http://dummyimage.com/145x100.png/dddddd/000000".to_string(),
        },
        Person {
            id: "a3d8adba-4c20-495f-b4c4-f7de8b9cfb15".to_string(),
            first_name: "Corby".to_string(),
            last_name: "Tettley".to_string(),
            graduation_year: 1984,
            address: "90329 Amoth Drive".to_string(),
            city: "Boulder".to_string(),
            zip: "80305".to_string(),
            country: "United States".to_string(),
            avatar: "http://dummyimage.com/198x100.png/cc0000/ffffff".to_string(),
        },
    ]
}
