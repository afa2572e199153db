// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small sample catalog for the CLI, tests and benches.
//!
//! Three teams own tables across a raw → staging → analytics → reporting
//! pipeline, plus an `auth` schema with Alice's `users` table.

use super::{Catalog, CatalogSnapshot, Column, Owner, Schema, Table};
use crate::error::CatalogError;
use crate::types::{ColumnId, OwnerId, SchemaId, TableId};

fn owner(id: u64, name: &str, email: &str) -> Owner {
    Owner {
        id: OwnerId(id),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn schema(id: u64, name: &str, description: &str) -> Schema {
    Schema {
        id: SchemaId(id),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn table(id: u64, schema: u64, owner: Option<u64>, name: &str, description: &str) -> Table {
    Table {
        id: TableId(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        schema_id: SchemaId(schema),
        owner_id: owner.map(OwnerId),
    }
}

fn column(id: u64, table: u64, name: &str, description: &str) -> Column {
    Column {
        id: ColumnId(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        table_id: TableId(table),
    }
}

/// The sample catalog as plain data.
pub fn demo_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        owners: vec![
            owner(1, "Data Engineering", "data-engineering@example.com"),
            owner(2, "Analytics", "analytics@example.com"),
            owner(3, "Product", "product@example.com"),
            owner(4, "Alice", "alice@example.com"),
        ],
        schemas: vec![
            schema(1, "raw", "Raw ingested data from source systems"),
            schema(2, "staging", "Cleaned and validated staging area"),
            schema(3, "analytics", "Analytics-ready data models"),
            schema(4, "reporting", "Business intelligence reporting tables"),
            schema(5, "auth", "Authentication and identity"),
        ],
        tables: vec![
            table(1, 1, Some(1), "users", "User account information and profiles"),
            table(2, 1, Some(1), "orders", "Customer order transactions"),
            table(3, 1, Some(3), "products", "Product catalog with pricing"),
            table(4, 3, Some(2), "dim_users", "User dimension table for analytics"),
            table(5, 3, Some(2), "fact_orders", "Order fact table with metrics"),
            table(6, 4, Some(2), "daily_sales", "Daily aggregated sales report"),
            table(7, 5, Some(4), "users", "User accounts"),
        ],
        columns: vec![
            column(1, 1, "user_id", "Unique identifier for each user"),
            column(2, 1, "email", "User email address"),
            column(3, 1, "created_at", "Account creation timestamp"),
            column(4, 1, "is_premium", "Premium subscription status"),
            column(5, 2, "order_id", "Unique order identifier"),
            column(6, 2, "user_id", "Reference to user who placed order"),
            column(7, 2, "total_amount", "Total order value in USD"),
            column(8, 2, "order_date", "Date order was placed"),
            column(9, 3, "product_id", "Unique product identifier"),
            column(10, 3, "product_name", "Display name of product"),
            column(11, 3, "price", "Current selling price"),
            column(12, 3, "category", "Product category classification"),
            column(13, 4, "user_key", "Surrogate key for user dimension"),
            column(14, 4, "user_id", "Natural key from source system"),
            column(15, 4, "user_segment", "Customer segmentation category"),
            column(16, 5, "order_key", "Surrogate key for order fact"),
            column(17, 5, "revenue", "Order revenue in local currency"),
            column(18, 5, "quantity", "Number of items in order"),
            column(19, 6, "report_date", "Date of sales report"),
            column(20, 6, "total_revenue", "Total daily revenue"),
            column(21, 6, "order_count", "Number of orders placed"),
            column(22, 7, "email", "Login address"),
        ],
    }
}

/// Load the sample catalog.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_snapshot(demo_snapshot())
}
