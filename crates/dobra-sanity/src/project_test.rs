use serde_json::json;

use super::*;

fn raw_product(value: serde_json::Value) -> RawProduct {
    serde_json::from_value(value).expect("fixture should deserialize")
}

fn image(reference: &str) -> serde_json::Value {
    json!({ "_type": "image", "asset": { "_ref": reference, "_type": "reference" } })
}

#[test]
fn summary_projects_full_listing_record() {
    let raw = raw_product(json!({
        "_id": "product-1",
        "title": "Vaso Terra",
        "slug": "vaso-terra",
        "status": "available",
        "quantityAvailable": 2,
        "startingPrice": 120,
        "shortDescription": "Vaso de barro ",
        "image": image("image-abc-800x800-jpg"),
        "featured": true,
        "order": 3,
        "category": { "title": "Vasos", "slug": "vasos" },
        "whatsappMessage": null
    }));

    let product = project_product_summary(raw).expect("should project");
    assert_eq!(product.id, "product-1");
    assert_eq!(product.status, ProductStatus::Available);
    assert_eq!(product.quantity_available, Some(2));
    assert_eq!(product.starting_price, Some(Decimal::from(120)));
    assert_eq!(product.short_description.as_deref(), Some("Vaso de barro"));
    assert_eq!(
        product.image.as_ref().map(|i| i.asset_ref.as_str()),
        Some("image-abc-800x800-jpg")
    );
    assert!(product.featured);
    assert_eq!(product.order, 3);
    assert_eq!(
        product.category,
        Some(CategoryRef {
            title: "Vasos".to_string(),
            slug: "vasos".to_string()
        })
    );
    assert!(product.whatsapp_message.is_none());
}

#[test]
fn summary_applies_defaults_to_sparse_record() {
    let raw = raw_product(json!({
        "_id": "product-2",
        "title": "Caneca",
        "slug": "caneca"
    }));

    let product = project_product_summary(raw).expect("should project");
    assert_eq!(product.status, ProductStatus::MadeToOrder);
    assert!(product.quantity_available.is_none());
    assert!(product.starting_price.is_none());
    assert!(product.image.is_none());
    assert!(!product.featured);
    assert_eq!(product.order, 0);
    assert!(product.category.is_none());
}

#[test]
fn summary_narrows_image_list_to_first_usable_image() {
    let raw = raw_product(json!({
        "_id": "product-3",
        "title": "Prato",
        "slug": "prato",
        "images": [null, { "_type": "image" }, image("image-first"), image("image-second")]
    }));

    let product = project_product_summary(raw).expect("should project");
    assert_eq!(product.image.map(|i| i.asset_ref), Some("image-first".to_string()));
}

#[test]
fn unknown_status_passes_through() {
    let raw = raw_product(json!({
        "_id": "p", "title": "T", "slug": "t", "status": "reserved"
    }));
    let product = project_product_summary(raw).expect("should project");
    assert_eq!(product.status, ProductStatus::Other("reserved".to_string()));
}

#[test]
fn invalid_numbers_are_dropped() {
    let raw = raw_product(json!({
        "_id": "p",
        "title": "T",
        "slug": "t",
        "quantityAvailable": -1,
        "startingPrice": -10,
        "order": 1.5
    }));
    let product = project_product_summary(raw).expect("should project");
    assert!(product.quantity_available.is_none());
    assert!(product.starting_price.is_none());
    assert_eq!(product.order, 0);

    let raw = raw_product(json!({
        "_id": "p", "title": "T", "slug": "t", "quantityAvailable": 2.5
    }));
    assert!(project_product_summary(raw)
        .expect("should project")
        .quantity_available
        .is_none());
}

#[test]
fn fractional_price_is_kept_exactly() {
    let raw = raw_product(json!({
        "_id": "p", "title": "T", "slug": "t", "startingPrice": 1234.5
    }));
    let product = project_product_summary(raw).expect("should project");
    assert_eq!(product.starting_price, Some(Decimal::new(12_345, 1)));
}

#[test]
fn records_without_identity_are_skipped() {
    let raws = vec![
        raw_product(json!({ "_id": "a", "title": "A", "slug": "a" })),
        raw_product(json!({ "_id": "b", "title": "  ", "slug": "b" })),
        raw_product(json!({ "_id": "c", "title": "C", "slug": null })),
        raw_product(json!({ "title": "D", "slug": "d" })),
    ];
    let products = project_product_summaries(raws);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].slug, "a");
}

#[test]
fn detail_keeps_all_images_and_rich_text() {
    let raw = raw_product(json!({
        "_id": "product-1",
        "title": "Vaso Terra",
        "slug": "vaso-terra",
        "status": "sold_out",
        "description": [
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    { "_type": "span", "text": "Feito ", "marks": [] },
                    { "_type": "span", "text": "à mão", "marks": ["em"] }
                ]
            },
            { "_type": "image", "asset": { "_ref": "image-inline" } }
        ],
        "images": [image("image-1"), image("image-2"), image("image-3")],
        "whatsappMessage": "  Quero este vaso  ",
        "seo": { "title": "Vaso", "description": "", "ogImage": null }
    }));

    let detail = project_product_detail(raw).expect("should project");
    assert_eq!(detail.status, ProductStatus::SoldOut);
    assert_eq!(
        detail
            .images
            .iter()
            .map(|i| i.asset_ref.as_str())
            .collect::<Vec<_>>(),
        vec!["image-1", "image-2", "image-3"]
    );
    assert_eq!(detail.description.len(), 2);
    assert_eq!(detail.description[0].plain_text(), "Feito à mão");
    assert_eq!(detail.description[0].spans[1].marks, vec!["em".to_string()]);
    assert_eq!(detail.description[1].kind, "image");
    assert!(detail.description[1].spans.is_empty());
    assert_eq!(detail.whatsapp_message.as_deref(), Some("Quero este vaso"));
    let seo = detail.seo.expect("seo present");
    assert_eq!(seo.title.as_deref(), Some("Vaso"));
    assert!(seo.description.is_none());
}

#[test]
fn detail_without_optional_content_is_empty_not_missing() {
    let raw = raw_product(json!({
        "_id": "p", "title": "T", "slug": "t",
        "description": null, "images": null, "seo": null
    }));
    let detail = project_product_detail(raw).expect("should project");
    assert!(detail.images.is_empty());
    assert!(detail.description.is_empty());
    assert!(detail.seo.is_none());
}

#[test]
fn site_settings_defaults_blank_fields() {
    let raw: RawSiteSettings = serde_json::from_value(json!({
        "whatsappPhone": "  ",
        "whatsappDefaultMessage": "",
        "topBannerText": "  Entrega sob encomenda  ",
        "heroImage": image("image-hero")
    }))
    .expect("fixture should deserialize");

    let settings = project_site_settings(raw);
    assert!(settings.whatsapp_phone.is_none());
    assert_eq!(settings.whatsapp_default_message, DEFAULT_WHATSAPP_MESSAGE);
    assert_eq!(
        settings.top_banner_text.as_deref(),
        Some("Entrega sob encomenda")
    );
    assert_eq!(
        settings.hero_image.map(|i| i.asset_ref),
        Some("image-hero".to_string())
    );
}

#[test]
fn site_settings_keeps_authored_values() {
    let raw: RawSiteSettings = serde_json::from_value(json!({
        "whatsappPhone": "+55 (11) 99999-9999",
        "whatsappDefaultMessage": "Hi! Interested.",
        "instagramUrl": "https://instagram.com/dobra"
    }))
    .expect("fixture should deserialize");

    let settings = project_site_settings(raw);
    assert_eq!(
        settings.whatsapp_phone.as_deref(),
        Some("+55 (11) 99999-9999")
    );
    assert_eq!(settings.whatsapp_default_message, "Hi! Interested.");
    assert_eq!(
        settings.instagram_url.as_deref(),
        Some("https://instagram.com/dobra")
    );
}

#[test]
fn category_requires_identity() {
    let ok: RawCategory = serde_json::from_value(json!({
        "_id": "cat-1", "title": "Vasos", "slug": "vasos", "order": 2
    }))
    .expect("fixture");
    assert_eq!(
        project_category(ok),
        Some(Category {
            id: "cat-1".to_string(),
            title: "Vasos".to_string(),
            slug: "vasos".to_string(),
            order: 2,
        })
    );

    let missing: RawCategory =
        serde_json::from_value(json!({ "_id": "cat-2", "title": "Pratos" })).expect("fixture");
    assert!(project_category(missing).is_none());
}
