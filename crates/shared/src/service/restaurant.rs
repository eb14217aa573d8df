use crate::{
    abstract_trait::{
        DynRestaurantCommandRepository, DynRestaurantQueryRepository, RestaurantServiceTrait,
    },
    domain::{
        requests::{
            CreateRestaurantRequest, DeliveryEstimateQuery, FindAllRestaurants,
            UpdateRestaurantRequest,
        },
        responses::{
            ApiResponse, ApiResponsePagination, DeliveryEstimateResponse, Pagination,
            RestaurantResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::Branch,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

const EARTH_RADIUS_KM: f64 = 6371.0;
/// Added travel time on top of the restaurant's base preparation window.
const MINUTES_PER_KM: f64 = 3.0;

pub struct RestaurantService {
    query: DynRestaurantQueryRepository,
    command: DynRestaurantCommandRepository,
}

impl RestaurantService {
    pub fn new(
        query: DynRestaurantQueryRepository,
        command: DynRestaurantCommandRepository,
    ) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl RestaurantServiceTrait for RestaurantService {
    async fn find_all(
        &self,
        req: &FindAllRestaurants,
    ) -> Result<ApiResponsePagination<Vec<RestaurantResponse>>, ServiceError> {
        info!("🏪 Listing restaurants (page {})", req.page);

        let (restaurants, total) = self.query.find_all(req).await?;
        let data = restaurants.into_iter().map(Into::into).collect();

        Ok(ApiResponsePagination::success(
            "Restaurants retrieved",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RestaurantResponse>, ServiceError> {
        let restaurant = self.query.find_by_id(id).await?;
        Ok(ApiResponse::success("Restaurant retrieved", restaurant.into()))
    }

    async fn create(
        &self,
        vendor_id: Uuid,
        req: &CreateRestaurantRequest,
    ) -> Result<ApiResponse<RestaurantResponse>, ServiceError> {
        info!("🏪 Vendor {vendor_id} creating restaurant {}", req.name);

        let restaurant = self.command.create(vendor_id, req).await?;

        info!("✅ Restaurant {} created", restaurant.restaurant_id);
        Ok(ApiResponse::success("Restaurant created", restaurant.into()))
    }

    async fn update(
        &self,
        id: Uuid,
        vendor_id: Uuid,
        req: &UpdateRestaurantRequest,
    ) -> Result<ApiResponse<RestaurantResponse>, ServiceError> {
        let existing = self.query.find_by_id(id).await?;

        if existing.vendor_id != vendor_id {
            error!("❌ Vendor {vendor_id} does not own restaurant {id}");
            return Err(ServiceError::Forbidden(
                "You do not own this restaurant".into(),
            ));
        }

        let restaurant = self.command.update(id, req).await?;
        Ok(ApiResponse::success("Restaurant updated", restaurant.into()))
    }

    async fn delivery_estimate(
        &self,
        id: Uuid,
        req: &DeliveryEstimateQuery,
    ) -> Result<ApiResponse<DeliveryEstimateResponse>, ServiceError> {
        let restaurant = self.query.find_by_id(id).await?;
        let branches = self.query.find_branches(id).await?;

        let nearest = nearest_branch(&branches, req.lat, req.lng)
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let distance_km = haversine_km(req.lat, req.lng, nearest.latitude, nearest.longitude);
        let estimated_minutes =
            restaurant.delivery_time_minutes + (distance_km * MINUTES_PER_KM).round() as i32;

        Ok(ApiResponse::success(
            "Delivery estimate calculated",
            DeliveryEstimateResponse {
                branch_id: nearest.branch_id,
                branch_label: nearest.label.clone(),
                distance_km,
                estimated_minutes,
            },
        ))
    }
}

fn nearest_branch(branches: &[Branch], lat: f64, lng: f64) -> Option<&Branch> {
    branches.iter().min_by(|a, b| {
        let da = haversine_km(lat, lng, a.latitude, a.longitude);
        let db = haversine_km(lat, lng, b.latitude, b.longitude);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(label: &str, lat: f64, lng: f64) -> Branch {
        Branch {
            branch_id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            label: label.into(),
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Ikeja to Lekki, roughly 24km
        let km = haversine_km(6.6018, 3.3515, 6.4698, 3.5852);
        assert!((20.0..30.0).contains(&km), "got {km}");
    }

    #[test]
    fn haversine_is_zero_for_same_point() {
        let km = haversine_km(6.5244, 3.3792, 6.5244, 3.3792);
        assert!(km.abs() < 1e-9);
    }

    #[test]
    fn picks_the_nearest_branch() {
        let branches = vec![
            branch("far", 9.0765, 7.3986),
            branch("near", 6.6018, 3.3515),
        ];

        let nearest = nearest_branch(&branches, 6.5244, 3.3792).unwrap();
        assert_eq!(nearest.label, "near");
    }

    #[test]
    fn no_branches_means_no_estimate() {
        assert!(nearest_branch(&[], 6.5244, 3.3792).is_none());
    }
}
