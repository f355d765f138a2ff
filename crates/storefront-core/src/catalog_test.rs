use super::*;

#[test]
fn portfolio_image_requires_img_tag_and_extension() {
    assert!(is_portfolio_image("IMG_2041.jpg"));
    assert!(is_portfolio_image("brand-img-04.PNG"));
    assert!(is_portfolio_image("img.jpeg"));
    assert!(!is_portfolio_image("photo.jpg"));
    assert!(!is_portfolio_image("IMG_2041.gif"));
}

#[test]
fn portfolio_image_excludes_videos_and_logos() {
    assert!(!is_portfolio_image("VID-IMG-0001.jpg"));
    assert!(!is_portfolio_image("img_logo.png"));
}

#[test]
fn product_name_strips_extension_and_capitalizes() {
    assert_eq!(product_name_from_file("IMG_2041.jpg"), "IMG 2041");
    assert_eq!(
        product_name_from_file("business-card_img-front.png"),
        "Business Card Img Front"
    );
}

#[test]
fn product_name_only_drops_last_extension() {
    assert_eq!(product_name_from_file("flyer.img.v2.jpeg"), "Flyer.Img.V2");
}

#[test]
fn product_name_without_extension_is_kept() {
    assert_eq!(product_name_from_file("banner img"), "Banner Img");
}

#[test]
fn portfolio_item_uses_default_price_and_directory() {
    let item = PortfolioItem::from_file("IMG_1.jpg");
    assert_eq!(item.product_price, "Contact for pricing");
    assert_eq!(item.image_path, "./images & logo/IMG_1.jpg");
}

#[test]
fn gallery_filters_files() {
    let gallery = Gallery::from_files(["IMG_1.jpg", "logo.png", "VID_1.mp4", "IMG_2.png"]);
    assert_eq!(gallery.len(), 2);
}

#[test]
fn gallery_pages_until_exhausted() {
    let files: Vec<String> = (0..30).map(|i| format!("IMG_{i}.jpg")).collect();
    let gallery = Gallery::from_files(&files);

    let first = gallery.page(0, ITEMS_PER_LOAD);
    assert_eq!(first.items.len(), 12);
    assert_eq!(first.next_cursor, Some(12));
    assert_eq!(first.items[0].product_name, "IMG 0");

    let second = gallery.page(12, ITEMS_PER_LOAD);
    assert_eq!(second.next_cursor, Some(24));

    let last = gallery.page(24, ITEMS_PER_LOAD);
    assert_eq!(last.items.len(), 6);
    assert_eq!(last.next_cursor, None);
}

#[test]
fn gallery_page_past_end_is_empty() {
    let gallery = Gallery::from_files(["IMG_1.jpg"]);
    let page = gallery.page(10, ITEMS_PER_LOAD);
    assert!(page.items.is_empty());
    assert_eq!(page.next_cursor, None);
}

#[test]
fn empty_gallery_has_no_next_page() {
    let gallery = Gallery::default();
    assert!(gallery.is_empty());
    assert_eq!(gallery.page(0, ITEMS_PER_LOAD).next_cursor, None);
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("storefront-{name}-{}", std::process::id()))
}

#[test]
fn from_dir_reads_images_in_name_order() {
    let dir = scratch_dir("gallery");
    std::fs::create_dir_all(dir.join("img_nested.jpg")).expect("create dirs");
    for name in ["img_b_print.png", "img_a_mug.jpg", "img_logo.png", "img_notes.txt"] {
        std::fs::write(dir.join(name), b"x").expect("write file");
    }

    let gallery = Gallery::from_dir(&dir);
    let page = gallery.page(0, 10);
    let names: Vec<&str> = page.items.iter().map(|i| i.product_name.as_str()).collect();
    assert_eq!(names, vec!["Img A Mug", "Img B Print"]);

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn from_dir_missing_directory_is_empty() {
    assert!(Gallery::from_dir(&scratch_dir("missing")).is_empty());
}
