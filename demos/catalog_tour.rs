use album_shelf::{AlbumDraft, Catalog, SortKey};
use anyhow::Result;

fn main() -> Result<()> {
    #[cfg(feature = "logs")]
    {
        use tracing_subscriber::{EnvFilter, fmt};
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut catalog = Catalog::sample();

    let added = catalog.add(AlbumDraft::new(
        "Borrow Checker Blues",
        "The Lifetimes",
        2024,
        11.49,
        "https://aka.ms/albums-daprlogo",
    ))?;
    println!("added #{}: {}", added.id, added.title);

    let updated = catalog.update(
        added.id,
        AlbumDraft::new(
            "Borrow Checker Blues (Deluxe)",
            "The Lifetimes",
            2024,
            12.49,
            "https://aka.ms/albums-daprlogo",
        ),
    )?;
    println!("updated #{}: {}", updated.id, updated.title);

    // unknown keys fall back to the stored order
    let listing = match "price".parse::<SortKey>().ok() {
        Some(key) => catalog.sorted(key),
        None => catalog.albums().to_vec(),
    };
    println!("\nby price:");
    for album in &listing {
        println!("{:>7.2}  {:<30} {}", album.price, album.title, album.artist);
    }

    let removed = catalog.remove(added.id)?;
    println!("\nremoved #{}: {}", removed.id, removed.title);
    println!("{} albums on the shelf", catalog.len());

    Ok(())
}
