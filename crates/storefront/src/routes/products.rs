//! Product route handlers.
//!
//! The handlers fetch raw rows from the catalog data API and hand them
//! to the aggregation engine in `marigold-core`. Payload assembly is a
//! pure function over the fetched rows so the selection and fallback
//! behavior stays testable without HTTP.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use marigold_core::images::{self, ResolvedImages};
use marigold_core::types::{ImageRow, ProductId, StockStatus, VariantRow};
use marigold_core::variants::{ColorOption, SizeOption, VariantSelection};

use crate::catalog::types::ProductRow;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Color selection query parameter.
#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    pub color: Option<String>,
}

/// Product detail payload for the product page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorOption>,
    pub stock_status: StockStatus,
    pub has_variants: bool,
    /// Color the gallery below was resolved for.
    pub selected_color: Option<String>,
    pub images: Vec<String>,
}

/// Gallery payload returned on a color change.
#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    pub selected_color: Option<String>,
    pub images: Vec<String>,
}

/// Display product detail.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<ProductDetail>> {
    let product_id = ProductId::new(id);
    let catalog = state.catalog();

    let product = catalog
        .product(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let (variants, images) = tokio::try_join!(
        catalog.variant_rows(product_id),
        catalog.image_rows(product_id),
    )?;

    Ok(Json(build_product_detail(
        &product,
        &variants,
        &images,
        query.color.as_deref(),
    )))
}

/// Re-resolve the gallery for a color change.
pub async fn gallery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<Gallery>> {
    let product_id = ProductId::new(id);
    let catalog = state.catalog();

    let product = catalog
        .product(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let images = catalog.image_rows(product_id).await?;

    Ok(Json(build_gallery(
        &product,
        &images,
        query.color.as_deref(),
    )))
}

/// Assemble the product detail payload from fetched rows.
///
/// An explicitly requested color wins; otherwise the gallery opens on
/// the first in-stock color, falling back to the first color.
fn build_product_detail(
    product: &ProductRow,
    variants: &[VariantRow],
    images: &[ImageRow],
    requested_color: Option<&str>,
) -> ProductDetail {
    let selection = VariantSelection::from_rows(variants);
    let selected_color = requested_color.map(str::to_string).or_else(|| {
        selection.default_color().map(|c| c.label.clone())
    });

    let resolved = images::resolve(images, selected_color.as_deref());

    ProductDetail {
        id: product.id,
        name: product.name.clone(),
        sizes: selection.sizes,
        colors: selection.colors,
        stock_status: selection.stock_status,
        has_variants: selection.has_variants,
        selected_color,
        images: gallery_urls(product, resolved),
    }
}

/// Assemble the gallery payload for one color.
fn build_gallery(product: &ProductRow, images: &[ImageRow], color: Option<&str>) -> Gallery {
    let resolved = images::resolve(images, color);
    Gallery {
        selected_color: color.map(str::to_string),
        images: gallery_urls(product, resolved),
    }
}

/// Thumbnail fallback: a product with no image rows still shows a frame.
fn gallery_urls(product: &ProductRow, resolved: ResolvedImages) -> Vec<String> {
    if resolved.has_images {
        resolved.urls
    } else {
        product.thumbnail_url.clone().into_iter().collect()
    }
}
