/// Top-down merge sort over inclusive ranges; `on_step` runs after each
/// merge of a range holding more than one element.
pub fn merge_sort<F: FnMut(&[u8])>(data: &mut [u8], mut on_step: F) {
    if data.len() > 1 {
        let last = data.len() - 1;
        sort_range(data, 0, last, &mut on_step);
    }
}

fn sort_range<F: FnMut(&[u8])>(data: &mut [u8], l: usize, r: usize, on_step: &mut F) {
    if l < r {
        let m = (l + r) / 2;
        sort_range(data, l, m, on_step);
        sort_range(data, m + 1, r, on_step);
        merge(data, l, m, r);
        on_step(data);
    }
}

/// Stable merge of the sorted runs `[l, m]` and `[m + 1, r]`.
fn merge(data: &mut [u8], l: usize, m: usize, r: usize) {
    let left = data[l..=m].to_vec();
    let right = data[m + 1..=r].to_vec();

    let (mut i, mut j, mut k) = (0, 0, l);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    for &v in left[i..].iter().chain(&right[j..]) {
        data[k] = v;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_merge() {
        let mut data = vec![4, 3, 2, 1];
        let mut steps = Vec::new();
        merge_sort(&mut data, |s| steps.push(s.to_vec()));
        assert_eq!(data, vec![1, 2, 3, 4]);
        assert_eq!(
            steps,
            vec![vec![3, 4, 2, 1], vec![3, 4, 1, 2], vec![1, 2, 3, 4]]
        );
    }

    #[test]
    fn n_minus_one_merges() {
        let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let mut count = 0;
        merge_sort(&mut data, |_| count += 1);
        assert_eq!(count, 9);
        assert_eq!(data, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn merge_keeps_left_run_first_on_ties() {
        let mut data = vec![1, 3, 1, 2];
        merge(&mut data, 0, 1, 3);
        assert_eq!(data, vec![1, 1, 2, 3]);
    }
}
