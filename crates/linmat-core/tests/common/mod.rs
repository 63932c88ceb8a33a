//! Fixture matrices drawn from N(0, 100), given in both memory orders.

#![allow(dead_code)]

pub const SHAPE_A: (usize, usize) = (2, 5);
pub const SHAPE_B: (usize, usize) = (2, 5);
pub const SHAPE_C: (usize, usize) = (4, 5);

pub const DATA_A: [f64; 10] = [
    -101.150912, 93.495624, 110.930722, 106.772404, -207.42968,
    25.927775, 74.670622, 86.315843, 76.171672, -139.423092,
];

pub const DATA_B: [f64; 10] = [
    -46.459683, -171.989914, -10.816796, 63.651986, -96.790388,
    -121.118253, 47.272552, 53.862629, -91.952823, -15.395335,
];

pub const DATA_C: [f64; 20] = [
    142.973209, -78.203504, -56.427461, 56.961676, -20.438408,
    43.040666, -120.489005, -33.048049, 119.62486, 13.863648,
    26.095837, -11.012805, -98.789821, 104.28924, 137.730803,
    -17.877866, -52.607965, 24.412453, 3.569682, 236.778069,
];

pub const FDATA_A: [f64; 10] = [
    -101.150912, 25.927775, 93.495624, 74.670622, 110.930722,
    86.315843, 106.772404, 76.171672, -207.42968, -139.423092,
];

pub const FDATA_B: [f64; 10] = [
    -46.459683, -121.118253, -171.989914, 47.272552, -10.816796,
    53.862629, 63.651986, -91.952823, -96.790388, -15.395335,
];

pub const FDATA_C: [f64; 20] = [
    142.973209, 43.040666, 26.095837, -17.877866, -78.203504,
    -120.489005, -11.012805, -52.607965, -56.427461, -33.048049,
    -98.789821, 24.412453, 56.961676, 119.62486, 104.28924,
    3.569682, -20.438408, 13.863648, 137.730803, 236.778069,
];

/// Element-wise `DATA_A + DATA_B`.
pub const SUM_AB: [f64; 10] = [
    -147.610595, -78.49428999999999, 100.113926, 170.42439, -304.22006799999997,
    -95.190478, 121.943174, 140.178472, -15.781150999999994, -154.81842699999999,
];
