//! Customer repository for database operations.
//!
//! Invoices are appended with the store's atomic `$push` so concurrent
//! appends to the same customer never overwrite each other.

use mongodb::bson::{doc, to_bson};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use super::RepositoryError;
use crate::models::customer::{Customer, Invoice};

const COLLECTION: &str = "customers";

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    db: &'a Database,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Customer> {
        self.db.collection(COLLECTION)
    }

    /// Get a customer by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Customer>, RepositoryError> {
        Ok(self
            .collection()
            .find_one(doc! { "userName": username }, None)
            .await?)
    }

    /// Insert a new customer, returning it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let result = self.collection().insert_one(&customer, None).await?;
        Ok(Customer {
            id: result.inserted_id.as_object_id(),
            ..customer
        })
    }

    /// Append an invoice to a customer's embedded array, returning the
    /// updated customer.
    ///
    /// Returns `None` if no customer has the given username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if the invoice cannot be
    /// converted to BSON.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn push_invoice(
        &self,
        username: &str,
        invoice: &Invoice,
    ) -> Result<Option<Customer>, RepositoryError> {
        let invoice = to_bson(invoice)?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .collection()
            .find_one_and_update(
                doc! { "userName": username },
                doc! { "$push": { "invoices": invoice } },
                options,
            )
            .await?)
    }
}
