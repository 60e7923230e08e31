//! Slide index arithmetic shared by the image slider and the ad banner.
//!
//! Both directions wrap: advancing past the last slide lands on the
//! first, and stepping back from the first lands on the last.

pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

pub fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + count - 1) % count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_advances_and_wraps() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(2, 4), 3);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn test_prev_steps_back_and_wraps() {
        assert_eq!(prev_index(3, 4), 2);
        assert_eq!(prev_index(1, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn test_single_slide_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn test_empty_set_is_inert() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
