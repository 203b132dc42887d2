//! Client-local cart state.
//!
//! Quantity is represented as one product snapshot per unit in a flat
//! list, grouped only at display time. The cart never talks to the backend
//! store on mutation; snapshots keep the price they had when added.

pub mod checkout;
pub mod storage;

pub use checkout::{CheckoutDetails, CheckoutError, CheckoutMode, CheckoutOutcome, checkout};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};

use rust_decimal::Decimal;

use shopfront_core::{Product, ProductId};

/// Subtotal above which shipping is free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// Flat shipping fee below the threshold.
const FLAT_SHIPPING_FEE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// Fixed 8% tax rate.
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// A grouped view of one product in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Order summary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        shipping: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// The shopper's cart, persisted through `S` on every mutation.
pub struct Cart<S: CartStorage> {
    storage: S,
    items: Vec<Product>,
}

impl<S: CartStorage> Cart<S> {
    /// Open the cart, loading whatever the storage holds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unreadable.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let items = storage.load()?;
        Ok(Self { storage, items })
    }

    /// The raw snapshot list, one entry per unit.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Units of `id` currently in the cart.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        u32::try_from(self.items.iter().filter(|p| p.id == id).count()).unwrap_or(u32::MAX)
    }

    /// Add one unit by appending a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn add(&mut self, product: Product) -> Result<(), StorageError> {
        self.items.push(product);
        self.persist()
    }

    /// Add one more unit of a product already in the cart by cloning its
    /// first snapshot. Returns false if the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn increase(&mut self, id: ProductId) -> Result<bool, StorageError> {
        let Some(snapshot) = self.items.iter().find(|p| p.id == id).cloned() else {
            return Ok(false);
        };
        self.items.push(snapshot);
        self.persist()?;
        Ok(true)
    }

    /// Remove one unit: the first matching snapshot, not any particular one.
    /// Returns false if the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn decrease(&mut self, id: ProductId) -> Result<bool, StorageError> {
        let Some(index) = self.items.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        self.items.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Remove every unit of a product. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if persisting fails.
    pub fn remove(&mut self, id: ProductId) -> Result<usize, StorageError> {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the cart and drop the stored copy.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be cleared.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.storage.clear()
    }

    /// Group snapshots into lines with quantities, preserving first-seen
    /// order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = Vec::new();
        for item in &self.items {
            if let Some(line) = lines.iter_mut().find(|l| l.product.id == item.id) {
                line.quantity += 1;
            } else {
                lines.push(CartLine {
                    product: item.clone(),
                    quantity: 1,
                });
            }
        }
        lines
    }

    /// Order summary: subtotal over snapshots, free shipping over the
    /// threshold (flat fee otherwise), fixed 8% tax. An empty cart is all
    /// zeros.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        if self.items.is_empty() {
            return CartTotals::ZERO;
        }

        let subtotal: Decimal = self.items.iter().map(|p| p.price).sum();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_FEE
        };
        let tax = subtotal * TAX_RATE;

        CartTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.items)
    }
}
