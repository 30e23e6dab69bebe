use super::{Listing, PropertyKind};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    price: u32,
    location: &str,
    area: f64,
    rooms: u32,
    bathrooms: u32,
    description: &str,
    image_url: &str,
    url: &str,
    kind: PropertyKind,
    year_built: u16,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        price,
        location: location.to_string(),
        area,
        rooms,
        bathrooms,
        description: description.to_string(),
        image_url: image_url.to_string(),
        url: url.to_string(),
        kind,
        year_built: Some(year_built),
        rating: None,
        saved: false,
        views: None,
    }
}

/// The listings the search screen starts with.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Cozy 2-bedroom apartment in center",
            35000,
            "Riga, Center",
            65.0,
            2,
            1,
            "Beautiful renovated apartment in the heart of Riga. Close to all amenities.",
            "https://images.unsplash.com/photo-1493809842364-78817add7ffb?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/centre/sample-1",
            PropertyKind::Apartment,
            2010,
        ),
        listing(
            "2",
            "Family house with garden",
            45000,
            "Jurmala",
            120.0,
            4,
            2,
            "Spacious family house with a large garden. Perfect for families.",
            "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=400",
            "https://ss.lv/msg/lv/real-estate/houses/jurmala/sample-2",
            PropertyKind::House,
            2005,
        ),
        listing(
            "3",
            "Modern studio apartment",
            28000,
            "Riga, Vecriga",
            35.0,
            1,
            1,
            "Modern studio in Old Riga. Fully furnished and ready to move in.",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/old-riga/sample-3",
            PropertyKind::Apartment,
            2018,
        ),
        listing(
            "4",
            "3-bedroom house with basement",
            38000,
            "Ogre",
            95.0,
            3,
            1,
            "Solid house with basement storage. Good for renovation project.",
            "https://images.unsplash.com/photo-1448630360428-65456885c650?w=400",
            "https://ss.lv/msg/lv/real-estate/houses/ogre/sample-4",
            PropertyKind::House,
            1995,
        ),
        listing(
            "5",
            "Luxury 2-bedroom with balcony",
            42000,
            "Riga, Quiet Center",
            78.0,
            2,
            2,
            "Luxury apartment with beautiful balcony and city views.",
            "https://images.unsplash.com/photo-1484154218962-a197022b5858?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/quiet-center/sample-5",
            PropertyKind::Apartment,
            2015,
        ),
    ]
}

/// Batch appended by a "load more" request, ids prefixed with `stamp`.
pub fn more_listings(stamp: &str) -> Vec<Listing> {
    vec![
        listing(
            &format!("{stamp}-1"),
            "Renovated 1-bedroom near park",
            32000,
            "Riga, Tornakalns",
            45.0,
            1,
            1,
            "Recently renovated apartment near Daugava river and parks.",
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/tornakalns/sample-6",
            PropertyKind::Apartment,
            2012,
        ),
        listing(
            &format!("{stamp}-2"),
            "Country house with land",
            39000,
            "Sigulda region",
            110.0,
            3,
            1,
            "House in nature with large plot of land. Perfect for weekend getaway.",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400",
            "https://ss.lv/msg/lv/real-estate/houses/sigulda/sample-7",
            PropertyKind::House,
            2000,
        ),
    ]
}

/// Candidate results of a filtered remote search, ids prefixed with `stamp`.
pub fn search_listings(stamp: &str) -> Vec<Listing> {
    vec![
        listing(
            &format!("{stamp}-1"),
            "Renovated apartment in Mezciems",
            35000,
            "Riga, Mezciems",
            55.0,
            2,
            1,
            "Recently renovated 2-room apartment. New windows, flooring, and kitchen.",
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/mezciems/abc123",
            PropertyKind::Apartment,
            2008,
        ),
        listing(
            &format!("{stamp}-2"),
            "House with land in Marupe",
            42000,
            "Marupe",
            85.0,
            3,
            1,
            "Private house with garden. Quiet area, good for families.",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400",
            "https://ss.lv/msg/lv/real-estate/houses/marupe/def456",
            PropertyKind::House,
            2000,
        ),
        listing(
            &format!("{stamp}-3"),
            "Studio in Old Town",
            30000,
            "Riga, Vecriga",
            28.0,
            1,
            1,
            "Charming studio in the heart of Old Riga. Walking distance to everything.",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400",
            "https://ss.lv/msg/lv/real-estate/flats/riga/old-town/ghi789",
            PropertyKind::Apartment,
            2015,
        ),
    ]
}
