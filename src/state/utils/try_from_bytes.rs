#[macro_export]
macro_rules! impl_try_from_bytes {
    ($struct_name:ident) => {
        impl $struct_name {
            pub fn try_from_bytes(data: &[u8]) -> Result<&Self, $crate::error::DelegationError> {
                bytemuck::try_from_bytes::<Self>(data).map_err(|_| {
                    $crate::error::DelegationError::InvalidPayloadLength {
                        expected: core::mem::size_of::<Self>(),
                        actual: data.len(),
                    }
                })
            }
        }
    };
}
