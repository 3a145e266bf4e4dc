//! Testimonial selection for the home page carousel.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::Testimonial;

/// Up to `count` distinct testimonials in random order.
pub fn random_testimonials<'a, R>(
    testimonials: &'a [Testimonial],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Testimonial>
where
    R: Rng + ?Sized,
{
    testimonials.choose_multiple(rng, count).collect()
}

/// The testimonial shown on its own: the first one.
#[must_use]
pub fn featured_testimonial(testimonials: &[Testimonial]) -> Option<&Testimonial> {
    testimonials.first()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::types::TestimonialId;

    fn testimonials(n: i64) -> Vec<Testimonial> {
        (1..=n)
            .map(|i| Testimonial {
                id: TestimonialId::new(i),
                name: format!("Customer {i}"),
                title: String::new(),
                image: String::new(),
                quote: "Great service".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_random_testimonials_are_distinct() {
        let all = testimonials(5);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = random_testimonials(&all, 3, &mut rng);
        assert_eq!(picked.len(), 3);
        let unique: HashSet<_> = picked.iter().map(|t| t.id).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_random_testimonials_capped_at_available() {
        let all = testimonials(2);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_testimonials(&all, 5, &mut rng).len(), 2);
    }

    #[test]
    fn test_featured_testimonial() {
        assert!(featured_testimonial(&[]).is_none());
        let all = testimonials(3);
        assert_eq!(featured_testimonial(&all).map(|t| t.id.get()), Some(1));
    }
}
