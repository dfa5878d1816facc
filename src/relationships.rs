//! # Object relationships, in ownership vocabulary
//!
//! The four UML relationship kinds map cleanly onto Rust:
//!
//! - **Composition** ("you are part of me"): plain owned fields. A
//!   [`House`] creates its rooms and they are dropped with it.
//! - **Aggregation** ("I organize you, but you exist elsewhere"): shared
//!   ownership via `Rc`. A [`Library`] holds books that outlive it.
//! - **Association** ("we are equal partners"): neither side owns the
//!   other, so they hold each other's identifiers, not each other.
//! - **Dependency** ("I consume your service temporarily"): a plain
//!   function call, no stored relationship at all.

use std::rc::Rc;

// --- Composition -----------------------------------------------------------

#[derive(Debug)]
pub struct Room {
    pub kind: String,
    pub area_sq_ft: u32,
}

pub struct House {
    pub address: String,
    rooms: Vec<Room>,
}

impl House {
    /// The house creates its rooms; nobody else ever holds them.
    pub fn new(address: impl Into<String>) -> Self {
        House {
            address: address.into(),
            rooms: vec![
                Room {
                    kind: "living room".to_string(),
                    area_sq_ft: 300,
                },
                Room {
                    kind: "kitchen".to_string(),
                    area_sq_ft: 120,
                },
            ],
        }
    }

    pub fn add_room(&mut self, kind: impl Into<String>, area_sq_ft: u32) {
        self.rooms.push(Room {
            kind: kind.into(),
            area_sq_ft,
        });
    }

    pub fn total_area(&self) -> u32 {
        self.rooms.iter().map(|room| room.area_sq_ft).sum()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

// --- Aggregation ------------------------------------------------------------

pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Rc<Self> {
        Rc::new(Book {
            title: title.into(),
            author: author.into(),
        })
    }
}

pub struct Library {
    pub name: String,
    books: Vec<Rc<Book>>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Library {
            name: name.into(),
            books: Vec::new(),
        }
    }

    /// The same `Rc<Book>` can sit in several libraries at once.
    pub fn acquire(&mut self, book: Rc<Book>) {
        self.books.push(book);
    }

    pub fn remove(&mut self, title: &str) {
        self.books.retain(|book| book.title != title);
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

// --- Association ------------------------------------------------------------

pub struct Doctor {
    pub name: String,
    patient_names: Vec<String>,
}

pub struct Patient {
    pub name: String,
    doctor_names: Vec<String>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Doctor {
            name: name.into(),
            patient_names: Vec::new(),
        }
    }

    pub fn patients(&self) -> &[String] {
        &self.patient_names
    }
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Patient {
            name: name.into(),
            doctor_names: Vec::new(),
        }
    }

    pub fn doctors(&self) -> &[String] {
        &self.doctor_names
    }
}

/// Links both directions by name. Either side can be dropped later without
/// the other noticing — they never owned each other.
pub fn associate(doctor: &mut Doctor, patient: &mut Patient) {
    if !doctor.patient_names.contains(&patient.name) {
        doctor.patient_names.push(patient.name.clone());
    }
    if !patient.doctor_names.contains(&doctor.name) {
        patient.doctor_names.push(doctor.name.clone());
    }
}

// --- Dependency --------------------------------------------------------------

pub fn tax(amount: f64, rate_percent: f64) -> f64 {
    amount * rate_percent / 100.0
}

pub struct Invoice {
    pub amount: f64,
}

impl Invoice {
    /// Consumes the `tax` service for one call; no relationship is stored.
    pub fn total_with_tax(&self, rate_percent: f64) -> f64 {
        self.amount + tax(self.amount, rate_percent)
    }
}
