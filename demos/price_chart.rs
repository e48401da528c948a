use album_shelf::{BAR_FILL, Catalog, Margin, price_bars};

fn main() {
    let catalog = Catalog::sample();
    let bars = price_bars(catalog.albums(), 640.0, 480.0, Margin::default());

    println!("<!-- {} bars, fill {BAR_FILL} -->", bars.len());
    for bar in &bars {
        println!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"/> <!-- {} -->"#,
            bar.x, bar.y, bar.width, bar.height, bar.label
        );
    }
}
