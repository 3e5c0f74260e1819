//! Fixed-order registry of the six chart builders.

use crate::category_map::CategoryMap;
use crate::category_trend::CategoryTrend;
use crate::cumulative_growth::CumulativeGrowth;
use crate::installs_price::InstallsVsPrice;
use crate::ratings_reviews::RatingsVsReviews;
use crate::size_rating::SizeVsRating;
use crate::traits::ChartBuilder;

/// All chart builders in their fixed report order.
pub fn builders() -> Vec<Box<dyn ChartBuilder>> {
    vec![
        Box::new(RatingsVsReviews),
        Box::new(InstallsVsPrice),
        Box::new(CategoryMap),
        Box::new(CumulativeGrowth),
        Box::new(SizeVsRating),
        Box::new(CategoryTrend),
    ]
}
