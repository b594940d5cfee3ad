use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a message that does not fit into the carrier image, header included
    #[error("Capacity Error: the message needs {required} bytes, but the image can carry only {available} bytes")]
    CapacityExceeded { required: u64, available: u64 },

    /// Represents an unveil without any secret message.
    /// A wrong key, an image without a message and corrupted data all end up here.
    #[error("No secret message found")]
    NoMessage,

    /// Represents a raw pixel buffer whose length does not match its dimensions
    #[error("Invalid pixel buffer: {actual} bytes provided, but the dimensions require {expected} bytes")]
    InvalidPixelBuffer { expected: u64, actual: u64 },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure of the operating system random source.
    #[error("Random source is not available")]
    RandomSourceError(#[source] rand::Error),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a hide or unveil request without a carrier image
    #[error("No carrier image set")]
    CarrierNotSet,

    /// Represents a hide request without an output file
    #[error("No target file set")]
    TargetNotSet,

    /// Represents a hide request without a message
    #[error("API Error: Missing message")]
    MissingMessage,
}
