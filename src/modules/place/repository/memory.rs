use super::{CreatePlacePayload, Error, Filters, Place, PlaceRepository, UpdatePlacePayload};
use crate::{
    modules::place::slug,
    utils::pagination::{Page, Pagination},
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use ulid::Ulid;

/// In-process stand-in for the `places` table, including its unique slug constraint.
#[derive(Default)]
pub struct MemoryPlaceRepository {
    places: Mutex<Vec<Place>>,
}

impl MemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository holding `count` distinct places.
    pub fn seeded(count: usize) -> Self {
        let now = Utc::now().naive_utc();
        let places = (1..=count)
            .map(|n| {
                let (name, city, state) = (format!("Place {n}"), format!("City {n}"), "State");
                Place {
                    id: Ulid::new().to_string(),
                    slug: slug::derive(&name, &city, state),
                    name,
                    city,
                    state: state.to_string(),
                    created_at: now,
                    updated_at: None,
                }
            })
            .collect();

        Self {
            places: Mutex::new(places),
        }
    }
}

#[async_trait]
impl PlaceRepository for MemoryPlaceRepository {
    async fn find_many(
        &self,
        filters: &Filters,
        pagination: &Pagination,
    ) -> Result<Page<Place>, Error> {
        let needle = filters.name().map(str::to_lowercase);
        let places = self.places.lock().await;

        let matching: Vec<&Place> = places
            .iter()
            .filter(|place| match &needle {
                Some(needle) => place.name.to_lowercase().contains(needle),
                None => true,
            })
            .collect();

        Ok(Page {
            total: matching.len() as u64,
            items: matching
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.per_page() as usize)
                .cloned()
                .collect(),
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Place>, Error> {
        let places = self.places.lock().await;
        Ok(places.iter().find(|place| place.id == id).cloned())
    }

    async fn find_by_slug_excluding_id(
        &self,
        slug: &str,
        excluded_id: Option<&str>,
    ) -> Result<Option<Place>, Error> {
        let places = self.places.lock().await;
        Ok(places
            .iter()
            .find(|place| place.slug == slug && Some(place.id.as_str()) != excluded_id)
            .cloned())
    }

    async fn create(&self, payload: CreatePlacePayload) -> Result<Place, Error> {
        let mut places = self.places.lock().await;
        if places.iter().any(|place| place.slug == payload.slug) {
            return Err(Error::DuplicateSlug);
        }

        let place = Place {
            id: Ulid::new().to_string(),
            name: payload.name,
            city: payload.city,
            state: payload.state,
            slug: payload.slug,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };
        places.push(place.clone());
        Ok(place)
    }

    async fn update_by_id(
        &self,
        id: &str,
        payload: UpdatePlacePayload,
    ) -> Result<Option<Place>, Error> {
        let mut places = self.places.lock().await;
        if places
            .iter()
            .any(|place| place.slug == payload.slug && place.id != id)
        {
            return Err(Error::DuplicateSlug);
        }

        Ok(places.iter_mut().find(|place| place.id == id).map(|place| {
            place.name = payload.name;
            place.city = payload.city;
            place.state = payload.state;
            place.slug = payload.slug;
            place.updated_at = Some(Utc::now().naive_utc());
            place.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Place>, Error> {
        let mut places = self.places.lock().await;
        Ok(places
            .iter()
            .position(|place| place.id == id)
            .map(|index| places.remove(index)))
    }
}

/// Repository whose every call fails, as when the database is unreachable.
pub struct UnavailablePlaceRepository;

#[async_trait]
impl PlaceRepository for UnavailablePlaceRepository {
    async fn find_many(&self, _: &Filters, _: &Pagination) -> Result<Page<Place>, Error> {
        Err(Error::UnexpectedError)
    }

    async fn find_by_id(&self, _: &str) -> Result<Option<Place>, Error> {
        Err(Error::UnexpectedError)
    }

    async fn find_by_slug_excluding_id(
        &self,
        _: &str,
        _: Option<&str>,
    ) -> Result<Option<Place>, Error> {
        Err(Error::UnexpectedError)
    }

    async fn create(&self, _: CreatePlacePayload) -> Result<Place, Error> {
        Err(Error::UnexpectedError)
    }

    async fn update_by_id(&self, _: &str, _: UpdatePlacePayload) -> Result<Option<Place>, Error> {
        Err(Error::UnexpectedError)
    }

    async fn delete_by_id(&self, _: &str) -> Result<Option<Place>, Error> {
        Err(Error::UnexpectedError)
    }
}
