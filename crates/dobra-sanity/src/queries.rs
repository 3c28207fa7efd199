//! GROQ queries issued by the storefront.
//!
//! Listing queries narrow the image set to the first photo; the detail query
//! keeps every image and the rich-text description. All listings sort by the
//! manual `order` field, then by title.

/// Fields shared by every listing projection.
macro_rules! product_listing_fields {
    () => {
        r#"{
  _id,
  title,
  "slug": slug.current,
  status,
  quantityAvailable,
  startingPrice,
  shortDescription,
  "image": images[0],
  featured,
  order,
  "category": category->{ title, "slug": slug.current },
  whatsappMessage
}"#
    };
}

pub const PRODUCTS: &str = concat!(
    r#"*[_type == "product" && defined(slug.current)] | order(order asc, title asc) "#,
    product_listing_fields!()
);

/// Products whose category has the slug given as `$category`.
pub const PRODUCTS_BY_CATEGORY: &str = concat!(
    r#"*[_type == "product" && defined(slug.current) && category->slug.current == $category] | order(order asc, title asc) "#,
    product_listing_fields!()
);

pub const FEATURED_PRODUCTS: &str = concat!(
    r#"*[_type == "product" && defined(slug.current) && featured == true] | order(order asc, title asc) "#,
    product_listing_fields!()
);

/// Single product by `$slug`, or `null`.
pub const PRODUCT_BY_SLUG: &str = r#"*[_type == "product" && slug.current == $slug][0] {
  _id,
  title,
  "slug": slug.current,
  status,
  quantityAvailable,
  startingPrice,
  shortDescription,
  description,
  "images": images[],
  featured,
  order,
  "category": category->{ title, "slug": slug.current },
  whatsappMessage,
  "seo": seo { title, description, ogImage }
}"#;

pub const PRODUCT_SLUGS: &str =
    r#"*[_type == "product" && defined(slug.current)]{ "slug": slug.current }"#;

/// The site-settings singleton, or `null`.
pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0] {
  whatsappPhone,
  whatsappDefaultMessage,
  heroImage,
  topBannerText,
  instagramUrl,
  "seo": seo { title, description, ogImage }
}"#;

pub const CATEGORIES: &str = r#"*[_type == "category" && defined(slug.current)] | order(order asc, title asc) {
  _id,
  title,
  "slug": slug.current,
  order
}"#;
