//! Shopfront CLI - browse the catalog and manage a local cart.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (falls back to mock data if the API is down)
//! shopfront products --category Electronics --sort price-asc
//! shopfront product 1
//!
//! # Manage the cart (persisted to a JSON file)
//! shopfront cart add 1
//! shopfront cart show
//! shopfront cart decrease 1
//! shopfront cart remove 1
//! shopfront cart clear
//!
//! # Checkout (local simulation unless --submit)
//! shopfront checkout
//! shopfront checkout --submit --name "Jane Doe" --email jane@example.com
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// CLI output goes to stdout by design
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use shopfront_core::{Customer, ProductId, ShippingAddress};
use shopfront_storefront::cart::{
    Cart, CheckoutDetails, CheckoutMode, CheckoutOutcome, JsonFileStorage, checkout,
};
use shopfront_storefront::catalog::{self, SortKey};
use shopfront_storefront::client::{ApiClient, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront storefront CLI")]
struct Cli {
    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,

    /// Cart file path
    #[arg(long, default_value = ".shopfront-cart.json", global = true)]
    cart_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: price-asc, price-desc, name-asc, name-desc
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Show one product in detail
    Product {
        /// Product id
        product_id: i64,
    },
    /// List categories
    Categories,
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the cart
    Checkout {
        /// Submit a real order to the API instead of simulating locally
        #[arg(long)]
        submit: bool,

        /// Customer name
        #[arg(long, default_value = "Demo Customer")]
        name: String,

        /// Customer email
        #[arg(long, default_value = "demo@example.com")]
        email: String,

        /// Shipping street address
        #[arg(long, default_value = "1 Demo Street")]
        street: String,

        /// Shipping city
        #[arg(long, default_value = "Springfield")]
        city: String,

        /// Shipping state
        #[arg(long, default_value = "IL")]
        state: String,

        /// Shipping postal code
        #[arg(long, default_value = "62701")]
        postal_code: String,

        /// Shipping country
        #[arg(long, default_value = "US")]
        country: String,

        /// Payment method
        #[arg(long, default_value = "credit_card")]
        payment_method: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add units of a product
    Add {
        /// Product id
        product_id: i64,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove one unit of a product
    Decrease {
        /// Product id
        product_id: i64,
    },
    /// Remove all units of a product
    Remove {
        /// Product id
        product_id: i64,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&cli.api_url)?;
    let storage = JsonFileStorage::new(&cli.cart_file);

    match cli.command {
        Commands::Products { category, sort } => {
            let sort = sort.map(|s| s.parse::<SortKey>()).transpose()?;
            let products = catalog::apply(client.fetch_products().await, category.as_deref(), sort);

            if products.is_empty() {
                println!("No products found matching your criteria.");
                return Ok(());
            }
            for p in products {
                println!(
                    "{:>4}  {:<24} ${:<10} {:<12} stock {}",
                    p.id, p.name, p.price, p.category, p.stock_quantity
                );
            }
        }
        Commands::Product { product_id } => {
            let p = client.fetch_product(ProductId::new(product_id)).await?;
            println!("{} (#{})", p.name, p.id);
            println!("  Price:    ${}", p.price);
            println!("  Category: {}", p.category);
            println!("  Stock:    {}", p.stock_quantity);
            println!("  {}", p.description);
        }
        Commands::Categories => {
            for c in client.fetch_categories().await {
                println!("{:>4}  {:<12} {}", c.id, c.name, c.description);
            }
        }
        Commands::Cart { action } => {
            let mut cart = Cart::open(storage)?;
            match action {
                CartAction::Show => show_cart(&cart),
                CartAction::Add { product_id, qty } => {
                    let id = ProductId::new(product_id);
                    // Look the snapshot up in the fetched catalog, mock
                    // fallback included
                    let products = client.fetch_products().await;
                    let Some(product) = products.into_iter().find(|p| p.id == id) else {
                        return Err(format!("no product with id {product_id}").into());
                    };
                    let name = product.name.clone();
                    for _ in 0..qty {
                        cart.add(product.clone())?;
                    }
                    println!("{name} added to cart (x{qty}).");
                }
                CartAction::Decrease { product_id } => {
                    if cart.decrease(ProductId::new(product_id))? {
                        println!("Removed one unit of product {product_id}.");
                    } else {
                        println!("Product {product_id} is not in the cart.");
                    }
                }
                CartAction::Remove { product_id } => {
                    let removed = cart.remove(ProductId::new(product_id))?;
                    println!("Removed {removed} unit(s) of product {product_id}.");
                }
                CartAction::Clear => {
                    cart.clear()?;
                    println!("Cart has been cleared.");
                }
            }
        }
        Commands::Checkout {
            submit,
            name,
            email,
            street,
            city,
            state,
            postal_code,
            country,
            payment_method,
        } => {
            let mut cart = Cart::open(storage)?;
            let mode = if submit {
                CheckoutMode::SubmitOrder
            } else {
                CheckoutMode::Simulate
            };
            let details = CheckoutDetails {
                customer: Customer { name, email },
                shipping_address: ShippingAddress {
                    street,
                    city,
                    state,
                    postal_code,
                    country,
                },
                payment_method,
            };

            match checkout(&mut cart, mode, &client, &details).await? {
                CheckoutOutcome::EmptyCart => println!("Your cart is empty."),
                CheckoutOutcome::Simulated => {
                    println!(
                        "Thank you for your order! This is a demo, so no actual order has been placed."
                    );
                }
                CheckoutOutcome::Submitted { order_id, total } => {
                    println!("Order {order_id} created successfully. Total: ${total}");
                }
            }
        }
    }

    Ok(())
}

fn show_cart<S: shopfront_storefront::cart::CartStorage>(cart: &Cart<S>) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        println!(
            "{:>4}  {:<24} ${:<10} x{}",
            line.product.id, line.product.name, line.product.price, line.quantity
        );
    }

    let totals = cart.totals();
    println!("  Subtotal: ${}", totals.subtotal);
    println!("  Shipping: ${}", totals.shipping);
    println!("  Tax:      ${}", totals.tax);
    println!("  Total:    ${}", totals.total);
}
