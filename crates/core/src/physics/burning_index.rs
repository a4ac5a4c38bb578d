//! Burning Index (BI)

use super::clamp_index;

/// Upper clamp for the burning index
pub const BURNING_INDEX_MAX: f64 = 999.0;

/// Combine spread and energy release into the burning index
///
/// `BI = 10 × SC × ERC / 100`, clamped to 0-999.
pub fn calculate_burning_index(spread_component: f64, energy_release_component: f64) -> f64 {
    let burning_index = 10.0 * spread_component * energy_release_component / 100.0;

    clamp_index(burning_index, 0.0, BURNING_INDEX_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_burning_index_product() {
        assert_relative_eq!(calculate_burning_index(20.0, 60.0), 120.0, epsilon = 1e-9);
        assert_eq!(calculate_burning_index(0.0, 97.0), 0.0);
    }

    #[test]
    fn test_burning_index_clamps() {
        // Largest product the upstream clamps allow is 10 × 99 × 97 / 100
        assert_relative_eq!(calculate_burning_index(99.0, 97.0), 960.3, epsilon = 1e-9);
        assert_eq!(calculate_burning_index(500.0, 500.0), BURNING_INDEX_MAX);
        assert_eq!(calculate_burning_index(-10.0, 50.0), 0.0);
    }
}
