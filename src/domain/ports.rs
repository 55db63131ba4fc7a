use super::employee::{Employee, EmployeeId};
use crate::error::Result;

/// Storage port for employee records.
///
/// The collection exclusively owns every record it holds and guarantees id
/// uniqueness for the lifetime of the process.
pub trait EmployeeStore {
    /// Appends a record, rejecting duplicates of an existing id.
    fn add(&mut self, employee: Employee) -> Result<()>;

    fn contains(&self, id: EmployeeId) -> bool;

    /// All records, in insertion order.
    fn all(&self) -> &[Employee];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type EmployeeStoreBox = Box<dyn EmployeeStore>;
