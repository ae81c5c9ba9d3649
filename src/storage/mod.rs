mod disk;

pub use self::disk::DiskStorage;
