/// Numeric helpers shared by the coordinate mapper and the mesh rasterizer

/// Linear interpolation through the two points `(x0, y0)` and `(x1, y1)`.
/// Values outside `[x0, x1]` are extrapolated, never clipped.
///
/// # Arguments
/// * `x` - Value to map
/// * `from` - Source interval endpoints (must not be equal)
/// * `to` - Target interval endpoints
pub fn interp_extrapolate<T>(x: T, from: (T, T), to: (T, T)) -> T
where
    T: num_traits::Float,
{
    let (x0, x1) = from;
    let (y0, y1) = to;
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Position of `x` inside `[low, high]` as a fraction, clamped to 0-1.
/// Returns zero for an empty interval.
pub fn normalize<T>(x: T, low: T, high: T) -> T
where
    T: num_traits::Float,
{
    let span = high - low;
    if span <= T::zero() {
        return T::zero();
    }
    ((x - low) / span).max(T::zero()).min(T::one())
}

/// Minimum and maximum of the finite values, if there are any
pub fn finite_range<T, I>(values: I) -> Option<(T, T)>
where
    T: num_traits::Float,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
