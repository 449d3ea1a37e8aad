// Clone cost model

/// Cost of purchasing the `clone_index`-th copy in a variant family.
///
/// The baseline (index 0) is always bought at face value. Clones pay
/// `floor(base_cost * clone_index^exponent)`.
pub fn clone_cost(base_cost: u32, clone_index: u32, exponent: f64) -> u64 {
    if clone_index == 0 {
        return u64::from(base_cost);
    }
    (f64::from(base_cost) * f64::from(clone_index).powf(exponent)).floor() as u64
}
