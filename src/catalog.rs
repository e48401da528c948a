use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A catalog record. `id` is assigned by the [`Catalog`] that stores
/// the album, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub price: f64,
    pub image_url: String,
}

impl Album {
    fn seed(id: u32, title: &str, artist: &str, year: u16, price: f64, image_url: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            artist: artist.to_owned(),
            year,
            price,
            image_url: image_url.to_owned(),
        }
    }
}

/// The caller-supplied half of an album, before the catalog assigns an
/// id. Drafts usually arrive as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub price: f64,
    pub image_url: String,
}

impl AlbumDraft {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: u16,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            price,
            image_url: image_url.into(),
        }
    }

    // Only the empty string is rejected; whitespace-only values are
    // stored as-is.
    fn check(&self) -> Result<(), CatalogError> {
        if self.title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if self.artist.is_empty() {
            return Err(CatalogError::EmptyArtist);
        }
        Ok(())
    }

    fn into_album(self, id: u32) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            year: self.year,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No album carries the requested id.
    #[error("album {0} not found")]
    NotFound(u32),

    #[error("album title is required")]
    EmptyTitle,

    #[error("album artist is required")]
    EmptyArtist,

    /// The sort key is not one of the recognized column names.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Columns an album listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
    Price,
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "name" and "title" address the same column.
        match s.to_ascii_lowercase().as_str() {
            "name" | "title" => Ok(Self::Title),
            "artist" => Ok(Self::Artist),
            "price" => Ok(Self::Price),
            _ => Err(CatalogError::UnknownSortKey(s.to_owned())),
        }
    }
}

/// An in-memory album store. Ids are assigned on insert and stay
/// stable across updates; listings preserve insertion order unless a
/// [`SortKey`] says otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the six well-known demo albums.
    pub fn sample() -> Self {
        Self {
            albums: vec![
                Album::seed(
                    1,
                    "You, Me and an App Id",
                    "Daprize",
                    2023,
                    10.99,
                    "https://aka.ms/albums-daprlogo",
                ),
                Album::seed(
                    2,
                    "Seven Revision Army",
                    "The Blue-Green Stripes",
                    2022,
                    13.99,
                    "https://aka.ms/albums-containerappslogo",
                ),
                Album::seed(
                    3,
                    "Scale It Up",
                    "KEDA Club",
                    2021,
                    13.99,
                    "https://aka.ms/albums-kedalogo",
                ),
                Album::seed(
                    4,
                    "Lost in Translation",
                    "MegaDNS",
                    2020,
                    12.99,
                    "https://aka.ms/albums-envoylogo",
                ),
                Album::seed(
                    5,
                    "Lock Down Your Love",
                    "V is for VNET",
                    2019,
                    12.99,
                    "https://aka.ms/albums-vnetlogo",
                ),
                Album::seed(
                    6,
                    "Sweet Container O' Mine",
                    "Guns N Probeses",
                    2018,
                    14.99,
                    "https://aka.ms/albums-containerappslogo",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// All albums in insertion order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Looks up a single album by id.
    pub fn get(&self, id: u32) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    /// All albums released in `year`, in insertion order.
    pub fn by_year(&self, year: u16) -> Vec<Album> {
        self.albums
            .iter()
            .filter(|album| album.year == year)
            .cloned()
            .collect()
    }

    /// Returns the albums sorted by `key`. Ties keep insertion order;
    /// the store itself is left untouched.
    pub fn sorted(&self, key: SortKey) -> Vec<Album> {
        let mut list = self.albums.clone();
        match key {
            SortKey::Title => list.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Artist => list.sort_by(|a, b| a.artist.cmp(&b.artist)),
            SortKey::Price => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        }
        list
    }

    /// Stores a draft under the next free id (one past the highest id
    /// in the store, or 1 for an empty store) and returns the stored
    /// album.
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyTitle` or `CatalogError::EmptyArtist`
    /// if the draft is incomplete.
    pub fn add(&mut self, draft: AlbumDraft) -> Result<Album, CatalogError> {
        draft.check()?;
        let id = self
            .albums
            .iter()
            .map(|album| album.id)
            .max()
            .map_or(1, |highest| highest + 1);
        let album = draft.into_album(id);
        self.albums.push(album.clone());
        #[cfg(feature = "logs")]
        tracing::info!(id = album.id, title = %album.title, "added album");
        Ok(album)
    }

    /// Replaces the album stored under `id` with the draft, keeping the
    /// id. Returns the updated album.
    ///
    /// # Errors
    /// Returns a draft validation error before touching the store, or
    /// `CatalogError::NotFound` if no album carries `id`.
    pub fn update(&mut self, id: u32, draft: AlbumDraft) -> Result<Album, CatalogError> {
        draft.check()?;
        let slot = self
            .albums
            .iter_mut()
            .find(|album| album.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        *slot = draft.into_album(id);
        #[cfg(feature = "logs")]
        tracing::info!(id, title = %slot.title, "updated album");
        Ok(slot.clone())
    }

    /// Removes the album stored under `id` and returns it.
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` if no album carries `id`.
    pub fn remove(&mut self, id: u32) -> Result<Album, CatalogError> {
        let index = self
            .albums
            .iter()
            .position(|album| album.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let album = self.albums.remove(index);
        #[cfg(feature = "logs")]
        tracing::info!(id, title = %album.title, "removed album");
        Ok(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, artist: &str, year: u16, price: f64) -> AlbumDraft {
        AlbumDraft::new(title, artist, year, price, "https://aka.ms/albums-daprlogo")
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.albums().is_empty());
    }

    #[test]
    fn test_sample_seed() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);

        let ids: Vec<u32> = catalog.albums().iter().map(|album| album.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let first = catalog.get(1).unwrap();
        assert_eq!(first.title, "You, Me and an App Id");
        assert_eq!(first.artist, "Daprize");
        assert_eq!(first.year, 2023);
        assert_eq!(first.price, 10.99);
        assert_eq!(first.image_url, "https://aka.ms/albums-daprlogo");
    }

    #[test]
    fn test_get_missing_album() {
        let catalog = Catalog::sample();
        assert!(catalog.get(7).is_none());
        assert!(Catalog::new().get(1).is_none());
    }

    #[test]
    fn test_by_year() {
        let mut catalog = Catalog::sample();
        catalog
            .add(draft("Scale It Up (Live)", "KEDA Club", 2021, 9.99))
            .unwrap();

        let hits = catalog.by_year(2021);
        let titles: Vec<&str> = hits.iter().map(|album| album.title.as_str()).collect();
        assert_eq!(titles, vec!["Scale It Up", "Scale It Up (Live)"]);

        assert!(catalog.by_year(1999).is_empty());
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut catalog = Catalog::sample();
        let album = catalog
            .add(draft("Borrow Checker Blues", "The Lifetimes", 2024, 11.49))
            .unwrap();
        assert_eq!(album.id, 7);
        assert_eq!(catalog.len(), 7);

        let mut empty = Catalog::new();
        let first = empty.add(draft("Solo", "Solo", 2024, 1.0)).unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_add_reuses_id_after_removing_newest() {
        let mut catalog = Catalog::sample();
        catalog.remove(6).unwrap();
        let album = catalog.add(draft("Replacement", "Someone", 2024, 5.0)).unwrap();
        assert_eq!(album.id, 6);

        // Removing below the highest id leaves the next id untouched.
        catalog.remove(3).unwrap();
        let album = catalog.add(draft("Another", "Someone", 2024, 5.0)).unwrap();
        assert_eq!(album.id, 7);
    }

    #[test]
    fn test_add_requires_title_and_artist() {
        let mut catalog = Catalog::sample();

        let err = catalog.add(draft("", "The Lifetimes", 2024, 11.49)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle));

        let err = catalog.add(draft("Borrow Checker Blues", "", 2024, 11.49)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyArtist));

        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_whitespace_only_title_is_stored() {
        let mut catalog = Catalog::new();
        let album = catalog.add(draft("   ", "The Lifetimes", 2024, 11.49)).unwrap();
        assert_eq!(album.title, "   ");
    }

    #[test]
    fn test_update_keeps_id() {
        let mut catalog = Catalog::sample();
        let updated = catalog
            .update(3, draft("Scale It Up (Deluxe)", "KEDA Club", 2021, 12.49))
            .unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.title, "Scale It Up (Deluxe)");

        let stored = catalog.get(3).unwrap();
        assert_eq!(stored, &updated);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_update_missing_album() {
        let mut catalog = Catalog::sample();
        let err = catalog
            .update(42, draft("Ghost Record", "Nobody", 2024, 0.99))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(42)));
    }

    #[test]
    fn test_failed_update_leaves_store_unchanged() {
        let mut catalog = Catalog::sample();
        let before = catalog.get(3).unwrap().clone();

        let err = catalog.update(3, draft("", "KEDA Club", 2021, 12.49)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle));
        assert_eq!(catalog.get(3).unwrap(), &before);
    }

    #[test]
    fn test_remove() {
        let mut catalog = Catalog::sample();
        let removed = catalog.remove(4).unwrap();
        assert_eq!(removed.title, "Lost in Translation");
        assert_eq!(catalog.len(), 5);
        assert!(catalog.get(4).is_none());

        let err = catalog.remove(4).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(4)));
    }

    #[test]
    fn test_sorted_by_title() {
        let catalog = Catalog::sample();
        let titles: Vec<String> = catalog
            .sorted(SortKey::Title)
            .into_iter()
            .map(|album| album.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Lock Down Your Love",
                "Lost in Translation",
                "Scale It Up",
                "Seven Revision Army",
                "Sweet Container O' Mine",
                "You, Me and an App Id",
            ]
        );
    }

    #[test]
    fn test_sorted_by_artist() {
        let catalog = Catalog::sample();
        let ids: Vec<u32> = catalog
            .sorted(SortKey::Artist)
            .into_iter()
            .map(|album| album.id)
            .collect();
        assert_eq!(ids, vec![1, 6, 3, 4, 2, 5]);
    }

    #[test]
    fn test_sorted_by_price_keeps_ties_stable() {
        let catalog = Catalog::sample();
        let ids: Vec<u32> = catalog
            .sorted(SortKey::Price)
            .into_iter()
            .map(|album| album.id)
            .collect();
        // 12.99 and 13.99 each appear twice; insertion order breaks the
        // ties.
        assert_eq!(ids, vec![1, 4, 5, 2, 3, 6]);
    }

    #[test]
    fn test_sorted_leaves_store_order() {
        let catalog = Catalog::sample();
        let _ = catalog.sorted(SortKey::Title);
        let ids: Vec<u32> = catalog.albums().iter().map(|album| album.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("Title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("ARTIST".parse::<SortKey>().unwrap(), SortKey::Artist);
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);

        let err = "genre".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSortKey(ref key) if key == "genre"));
    }

    #[test]
    fn test_album_json_shape() {
        let catalog = Catalog::sample();
        let album = catalog.get(1).unwrap();

        let json = serde_json::to_string(album).unwrap();
        assert!(json.contains(r#""image_url":"https://aka.ms/albums-daprlogo""#));
        assert!(json.contains(r#""title":"You, Me and an App Id""#));

        let back: Album = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, album);
    }

    #[test]
    fn test_draft_from_json() {
        let json = r#"{
            "title": "Borrow Checker Blues",
            "artist": "The Lifetimes",
            "year": 2024,
            "price": 11.49,
            "image_url": "https://aka.ms/albums-daprlogo"
        }"#;
        let parsed: AlbumDraft = serde_json::from_str(json).unwrap();

        let mut catalog = Catalog::new();
        let album = catalog.add(parsed).unwrap();
        assert_eq!(album.id, 1);
        assert_eq!(album.artist, "The Lifetimes");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CatalogError::NotFound(42).to_string(), "album 42 not found");
        assert_eq!(CatalogError::EmptyTitle.to_string(), "album title is required");
        assert_eq!(
            CatalogError::EmptyArtist.to_string(),
            "album artist is required"
        );
        assert_eq!(
            CatalogError::UnknownSortKey("genre".to_owned()).to_string(),
            "unknown sort key: genre"
        );
    }
}
