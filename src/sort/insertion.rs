/// Shifts larger elements right until the key fits. `on_step` runs after
/// every shift and once more after the key lands, if anything moved.
pub fn insertion_sort<F: FnMut(&[u8])>(data: &mut [u8], mut on_step: F) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
            on_step(data);
        }

        if j != i {
            data[j] = key;
            on_step(data);
        }
    }
}
