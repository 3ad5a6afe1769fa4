//! Integration tests for nixnd
//!
//! These tests cover the array contract a storage binding relies on.

use nixnd::{
    DataType, MemoryStorage, NDArray, NdError, Region, Scalar, ShapeDescriptor, StorageAdapter,
    TypedBuffer, parse, writer,
};
use proptest::prelude::*;

// =============================================================================
// Indexed access
// =============================================================================

#[test]
fn float64_cube_reads_back_in_order() {
    let dims = [3, 4, 2];
    let mut arr = NDArray::new(&dims, DataType::Float64).unwrap();

    let mut value = 0.0f64;
    for i in 0..dims[0] {
        for j in 0..dims[1] {
            for k in 0..dims[2] {
                arr.set(&[i, j, k], value).unwrap();
                value += 1.0;
            }
        }
    }

    let mut read = Vec::new();
    for i in 0..dims[0] {
        for j in 0..dims[1] {
            for k in 0..dims[2] {
                read.push(arr.get::<f64>(&[i, j, k]).unwrap());
            }
        }
    }
    let expected: Vec<f64> = (0..24).map(f64::from).collect();
    assert_eq!(read, expected);
    assert_eq!(arr.raw_buffer::<f64>().unwrap(), expected.as_slice());
}

#[test]
fn int32_square_lookup() {
    let mut arr = NDArray::new(&[5, 5], DataType::Int32).unwrap();
    let mut value = 0;
    for i in 0..5 {
        for j in 0..5 {
            arr.set(&[i, j], value).unwrap();
            value += 1;
        }
    }

    assert_eq!(arr.get::<i32>(&[1, 0]), Ok(5));
    assert_eq!(arr.get::<i32>(&[3, 3]), Ok(18));
    assert_eq!(arr.get::<i32>(&[4, 4]), Ok(24));
}

#[test]
fn double_cube_offsets() {
    let dims = [3, 4, 5];
    let mut arr = NDArray::new(&dims, DataType::Float64).unwrap();
    for (n, idx) in arr.descriptor().clone().indices().enumerate() {
        arr.set(&idx, n as f64).unwrap();
    }

    assert_eq!(arr.get::<f64>(&[1, 0, 3]), Ok(23.0));
    assert_eq!(arr.get::<f64>(&[2, 0, 2]), Ok(42.0));
    assert_eq!(arr.get::<f64>(&[1, 1, 1]), Ok(26.0));
}

// =============================================================================
// Construction and kind errors
// =============================================================================

#[test]
fn short_flat_data_is_rejected() {
    let result = NDArray::from_vec(vec![1.0f64, 2.0, 3.0, 4.0], &[5]);
    assert_eq!(
        result,
        Err(NdError::ShapeMismatch {
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn raw_buffer_through_wrong_kind() {
    let arr = NDArray::new(&[5], DataType::Float64).unwrap();
    assert_eq!(
        arr.raw_buffer::<i32>(),
        Err(NdError::TypeMismatch {
            expected: DataType::Int32,
            actual: DataType::Float64
        })
    );
}

#[test]
fn negative_extent_from_boundary() {
    let shape = ShapeDescriptor::from_signed(&[3, -2]);
    assert!(matches!(shape, Err(NdError::UnsupportedShape { .. })));
}

#[test]
fn unset_kind_cannot_allocate() {
    assert_eq!(
        TypedBuffer::zeros(DataType::Nothing, 4),
        Err(NdError::UnsupportedDataType(DataType::Nothing))
    );
}

#[test]
fn every_kind_holds_its_extremes() {
    let mut arr = NDArray::new(&[2], DataType::Int8).unwrap();
    arr.set(&[0], i8::MIN).unwrap();
    arr.set(&[1], i8::MAX).unwrap();
    assert_eq!(arr.raw_buffer::<i8>().unwrap(), &[i8::MIN, i8::MAX]);

    let mut arr = NDArray::new(&[2], DataType::Int16).unwrap();
    arr.set(&[1], i16::MIN).unwrap();
    assert_eq!(arr.get::<i16>(&[1]), Ok(i16::MIN));

    let mut arr = NDArray::new(&[2], DataType::Int64).unwrap();
    arr.set(&[0], i64::MAX).unwrap();
    assert_eq!(arr.get::<i64>(&[0]), Ok(i64::MAX));

    let mut arr = NDArray::new(&[2], DataType::Float32).unwrap();
    arr.set(&[0], f32::MIN_POSITIVE).unwrap();
    arr.set(&[1], f32::NEG_INFINITY).unwrap();
    assert_eq!(arr.get::<f32>(&[0]), Ok(f32::MIN_POSITIVE));
    assert_eq!(arr.get::<f32>(&[1]), Ok(f32::NEG_INFINITY));
}

#[test]
fn nan_payload_survives_scalar_access() {
    let nan = f64::from_bits(0x7FF8_0000_0000_1234);
    let mut arr = NDArray::new(&[1, 1], DataType::Float64).unwrap();
    arr.set_scalar(&[0, 0], Scalar::from(nan)).unwrap();
    let back = arr.get_scalar(&[0, 0]).unwrap();
    assert!(back.bit_eq(Scalar::Float64(nan)));
}

// =============================================================================
// Storage adapter flows
// =============================================================================

#[test]
fn stage_write_then_read_regions() {
    let mut store = MemoryStorage::new(&[4, 6], DataType::Int64).unwrap();

    // write a 2x3 block at (1, 2)
    let block = NDArray::from_vec((1..=6).collect::<Vec<i64>>(), &[2, 3]).unwrap();
    store
        .write_region(&Region::new(vec![2, 3], vec![1, 2]), &block)
        .unwrap();

    // read back an overlapping 3x2 column strip at (0, 3)
    let strip = store.read(&Region::new(vec![3, 2], vec![0, 3])).unwrap();
    assert_eq!(strip.dims(), &[3, 2]);
    assert_eq!(strip.raw_buffer::<i64>().unwrap(), &[0, 0, 2, 3, 5, 6]);

    // whole dataset: untouched cells stay zero
    let all = store.read_all().unwrap();
    assert_eq!(all.get::<i64>(&[2, 4]), Ok(6));
    assert_eq!(all.get::<i64>(&[3, 5]), Ok(0));
}

#[test]
fn region_outside_extent_is_rejected() {
    let store = MemoryStorage::new(&[3], DataType::Float32).unwrap();
    assert!(matches!(
        store.read(&Region::new(vec![2], vec![2])),
        Err(NdError::InvalidRegion(_))
    ));
}

#[test]
fn huge_region_is_rejected_not_allocated() {
    let store = MemoryStorage::new(&[3], DataType::Float64).unwrap();
    let region = Region::new(vec![usize::MAX / 16], vec![0]);
    assert!(matches!(store.read(&region), Err(NdError::InvalidRegion(_))));
}

#[test]
fn extent_grows_like_an_appended_dataset() {
    let mut store = MemoryStorage::from_array(
        NDArray::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap(),
    );
    store.set_extent(&[5]).unwrap();
    let tail = NDArray::from_vec(vec![4.0f32, 5.0], &[2]).unwrap();
    store
        .write_region(&Region::new(vec![2], vec![3]), &tail)
        .unwrap();
    assert_eq!(
        store.into_array().raw_buffer::<f32>().unwrap(),
        &[1.0, 2.0, 3.0, 4.0, 5.0]
    );
}

// =============================================================================
// Byte encoding
// =============================================================================

#[test]
fn encode_decode_every_kind() {
    let arrays = vec![
        NDArray::from_vec(vec![-1i8, 0, 1, 2], &[2, 2]).unwrap(),
        NDArray::from_vec(vec![i16::MIN, i16::MAX], &[2]).unwrap(),
        NDArray::from_vec(vec![7i32; 6], &[1, 2, 3]).unwrap(),
        NDArray::from_vec(vec![i64::MIN], &[]).unwrap(),
        NDArray::from_vec(vec![0.5f32, -0.0], &[2, 1]).unwrap(),
        NDArray::new(&[3, 0], DataType::Float64).unwrap(),
    ];
    for arr in arrays {
        let bytes = writer::to_bytes(&arr).unwrap();
        let back = parse(&bytes).unwrap();
        assert_eq!(back.data_type(), arr.data_type());
        assert_eq!(back.dims(), arr.dims());
        assert_eq!(back, arr);
    }
}

#[test]
fn decode_then_store() {
    let arr = NDArray::from_vec(vec![1i32, 2, 3, 4], &[2, 2]).unwrap();
    let decoded = parse(&writer::to_bytes(&arr).unwrap()).unwrap();

    let mut store = MemoryStorage::new(&[2, 2], DataType::Int32).unwrap();
    store.write(&decoded).unwrap();
    assert_eq!(store.as_array(), &arr);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_dims() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..5, 0..5)
}

fn arb_dtype() -> impl Strategy<Value = DataType> {
    prop_oneof![
        Just(DataType::Int8),
        Just(DataType::Int16),
        Just(DataType::Int32),
        Just(DataType::Int64),
        Just(DataType::Float32),
        Just(DataType::Float64),
    ]
}

fn scalar_of(dtype: DataType, seed: i64, bits: u64) -> Scalar {
    match dtype {
        DataType::Int8 => Scalar::Int8(seed as i8),
        DataType::Int16 => Scalar::Int16(seed as i16),
        DataType::Int32 => Scalar::Int32(seed as i32),
        DataType::Int64 => Scalar::Int64(seed),
        DataType::Float32 => Scalar::Float32(f32::from_bits(bits as u32)),
        DataType::Float64 => Scalar::Float64(f64::from_bits(bits)),
        DataType::Nothing => unreachable!("not generated"),
    }
}

fn other_kind(dtype: DataType) -> DataType {
    match dtype {
        DataType::Float64 => DataType::Int32,
        _ => DataType::Float64,
    }
}

proptest! {
    #[test]
    fn stride_law(dims in arb_dims()) {
        let shape = ShapeDescriptor::new(&dims).unwrap();
        let strides = shape.strides();
        prop_assert_eq!(strides.len(), dims.len());
        if let Some(last) = strides.last() {
            prop_assert_eq!(*last, 1);
        }
        for i in 0..dims.len().saturating_sub(1) {
            prop_assert_eq!(strides[i], strides[i + 1] * dims[i + 1]);
        }
    }

    #[test]
    fn buffer_length_is_product(dims in arb_dims(), dtype in arb_dtype()) {
        let arr = NDArray::new(&dims, dtype).unwrap();
        prop_assert_eq!(arr.buffer().len(), dims.iter().product::<usize>());
        prop_assert_eq!(arr.size(), arr.buffer().len());
        prop_assert_eq!(arr.rank(), dims.len());
    }

    #[test]
    fn set_then_get_is_exact(
        dims in proptest::collection::vec(1usize..5, 0..4),
        dtype in arb_dtype(),
        pick in any::<prop::sample::Index>(),
        seed in any::<i64>(),
        bits in any::<u64>(),
    ) {
        let mut arr = NDArray::new(&dims, dtype).unwrap();
        let all: Vec<_> = arr.descriptor().indices().collect();
        let idx = pick.get(&all).clone();
        let value = scalar_of(dtype, seed, bits);

        arr.set_scalar(&idx, value).unwrap();
        prop_assert!(arr.get_scalar(&idx).unwrap().bit_eq(value));
    }

    #[test]
    fn foreign_kind_is_isolated(dims in arb_dims(), dtype in arb_dtype(), seed in any::<i64>()) {
        let mut arr = NDArray::new(&dims, dtype).unwrap();
        let before = arr.clone();
        let foreign = other_kind(dtype);
        let idx = vec![0; dims.len()];

        let set = arr.set_scalar(&idx, scalar_of(foreign, seed, seed as u64));
        let is_type_mismatch = matches!(set, Err(NdError::TypeMismatch { .. }));
        prop_assert!(is_type_mismatch);
        match foreign {
            DataType::Int32 => {
                let is_type_mismatch = matches!(arr.raw_buffer::<i32>(), Err(NdError::TypeMismatch { .. }));
                prop_assert!(is_type_mismatch);
            }
            _ => {
                let is_type_mismatch = matches!(arr.raw_buffer::<f64>(), Err(NdError::TypeMismatch { .. }));
                prop_assert!(is_type_mismatch);
            }
        }
        prop_assert_eq!(arr, before);
    }

    #[test]
    fn wrong_length_is_rejected(dims in arb_dims(), extra in 1usize..4) {
        let expected = dims.iter().product::<usize>();
        let data = vec![0i16; expected + extra];
        prop_assert_eq!(
            NDArray::from_slice(&data, &dims),
            Err(NdError::ShapeMismatch { expected, actual: expected + extra })
        );
    }
}
