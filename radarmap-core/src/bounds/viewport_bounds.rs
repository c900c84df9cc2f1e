use crate::model::Coordinate;
use geo::{BoundingRect, Coord, MultiPoint, Point, Rect};

/// every coordinate rendered during one run, in emission order.
///
/// stages return their contribution and the caller folds them in with [`Extend`];
/// the collection is consumed once at the end to fit a viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportBounds {
    coordinates: Vec<Coordinate>,
}

impl ViewportBounds {
    pub fn accumulate<I>(coordinates: I) -> ViewportBounds
    where
        I: IntoIterator<Item = Coordinate>,
    {
        ViewportBounds {
            coordinates: coordinates.into_iter().collect(),
        }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// smallest rectangle (x=longitude, y=latitude) containing every coordinate,
    /// None for an empty collection.
    pub fn extent(&self) -> Option<Rect<f64>> {
        let points = self
            .coordinates
            .iter()
            .map(|c| Point::from(*c))
            .collect::<MultiPoint<f64>>();
        points.bounding_rect()
    }

    /// extent grown on every side by `ratio` of its width and height.
    pub fn padded_extent(&self, ratio: f64) -> Option<Rect<f64>> {
        self.extent().map(|rect| {
            let dx = rect.width() * ratio;
            let dy = rect.height() * ratio;
            Rect::new(
                Coord {
                    x: rect.min().x - dx,
                    y: rect.min().y - dy,
                },
                Coord {
                    x: rect.max().x + dx,
                    y: rect.max().y + dy,
                },
            )
        })
    }
}

impl Extend<Coordinate> for ViewportBounds {
    fn extend<T: IntoIterator<Item = Coordinate>>(&mut self, iter: T) {
        self.coordinates.extend(iter)
    }
}

impl FromIterator<Coordinate> for ViewportBounds {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        ViewportBounds::accumulate(iter)
    }
}
