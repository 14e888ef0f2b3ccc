use std::collections::HashSet;
use rgb::RGB8;
use ebl_palette::*;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

#[test]
fn palette_sizes() {
    assert_eq!(BRAND.len(), 12);
    assert_eq!(SAFE.len(), 12);
    assert_eq!(SEQ_MINT.len(), 5);
    assert_eq!(SEQ_APRICOT.len(), 5);
    assert_eq!(DIV_CRAN_MINT.len(), 5);
    assert_eq!(Palette::all().count(), 5);
}

#[test]
fn every_color_is_uppercase_hex() {
    for p in Palette::all() {
        for h in p.hex() {
            assert!(is_hex_color(h), "{}: {h}", p.name());
        }
    }
}

#[test]
fn categorical_palettes_have_no_duplicates() {
    for p in [BRAND, SAFE] {
        let distinct: HashSet<&str> = p.hex().collect();
        assert_eq!(distinct.len(), p.len(), "{}", p.name());
    }
}

#[test]
fn safe_literals() {
    let hex: Vec<_> = SAFE.hex().collect();
    assert_eq!(hex, ["#B63E6A", "#E982B0", "#800629", "#F7956A", "#FEC891",
                     "#C34E22", "#4880A8", "#83BDDA", "#124271", "#6D2D43",
                     "#9D6179", "#350009"]);
    assert_eq!(SAFE.blind(), Trivalent::Yes);
    assert_eq!(SAFE.typ(), PaletteType::Qual);
}

#[test]
fn ramps() {
    assert_eq!(SEQ_MINT.hex().collect::<Vec<_>>(),
               ["#E7F7F7", "#BDEAEA", "#7ED9D9", "#4BA6A6", "#2D6F6F"]);
    assert_eq!(SEQ_APRICOT.hex().collect::<Vec<_>>(),
               ["#FFF2E2", "#FFE2C3", "#FFD091", "#F3A45E", "#C0712B"]);
    assert_eq!(DIV_CRAN_MINT.hex().collect::<Vec<_>>(),
               ["#810D4B", "#B4417E", "#FFF8E6", "#4BA6A6", "#187373"]);
    assert_eq!(SEQ_MINT.typ(), PaletteType::Seq);
    assert_eq!(DIV_CRAN_MINT.typ(), PaletteType::Div);
}

#[test]
fn lookup_by_name() {
    for name in PaletteName::ALL {
        let p = palette(name.as_str()).unwrap();
        assert_eq!(p.name(), name.to_string());
    }
    assert!(matches!(palette("Brand"), Err(Error::UnknownPalette(_))));
}

#[test]
fn get_colormap_keeps_order() {
    let cmap = get_colormap("brand", "ebl12").unwrap();
    assert_eq!(cmap.name(), EBL12);
    let colors: Vec<RGB8> = cmap.colors();
    assert_eq!(colors, BRAND.colors::<RGB8>());
    assert_eq!(cmap.hex(), BRAND.hex().collect::<Vec<_>>());

    let safe = get_colormap("safe", "ebl12_safe").unwrap();
    assert_eq!(safe, ebl_safe_cmap());
    assert_eq!(ebl_cmap().name(), "ebl12");
    assert!(matches!(get_colormap("nope", "x"), Err(Error::UnknownPalette(_))));
}

#[test]
fn diverging_colormap() {
    let cmap = get_colormap("div_cran_mint", "div").unwrap();
    assert_eq!(cmap.len(), 256);
    let mid: RGB8 = cmap.rgb(0.5);
    // Halfway is the neutral breakpoint (level 128 of 256).
    let expected = RGB8::from_hex("#FFF8E6").unwrap();
    assert!((mid.r as i32 - expected.r as i32).abs() <= 2);
    assert!((mid.g as i32 - expected.g as i32).abs() <= 2);
    assert!((mid.b as i32 - expected.b as i32).abs() <= 2);
}
