macro_rules! impl_wrapper {
    ($T:ty$(, $Args:expr)*) => {
        /// Wraps a record owned by GPGME.
        ///
        /// # Safety
        ///
        /// `raw` must be non-null and point to a live record of the matching
        /// type for as long as the returned view (and anything borrowed from
        /// it) is used.
        #[inline]
        pub unsafe fn from_raw(raw: $T) -> Self {
            debug_assert!(!raw.is_null());
            Self(NonNull::new_unchecked(raw)$(, $Args)*)
        }

        #[inline]
        pub fn as_raw(&self) -> $T {
            self.0.as_ptr()
        }
    };
}

macro_rules! impl_list_iterator {
    ($Vis:vis struct $Name:ident($Item:ident: $Raw:ty)) => {
        #[derive(Clone)]
        $Vis struct $Name<'a>(Option<$Item<'a>>);

        impl $Name<'_> {
            /// # Safety
            ///
            /// `first` must be null or the head of a live, null-terminated
            /// list.
            #[inline]
            pub unsafe fn from_list(first: $Raw) -> Self {
                if first.is_null() {
                    $Name(None)
                } else {
                    $Name(Some($Item::from_raw(first)))
                }
            }
        }

        impl<'a> Iterator for $Name<'a> {
            type Item = $Item<'a>;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let current = self.0.take()?;
                unsafe {
                    let next = (*current.as_raw()).next;
                    if !next.is_null() {
                        self.0 = Some($Item::from_raw(next));
                    }
                }
                Some(current)
            }
        }

        impl ::std::iter::FusedIterator for $Name<'_> {}

        impl ::std::fmt::Debug for $Name<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_list().entries(self.clone()).finish()
            }
        }
    };
}

macro_rules! ffi_enum_wrapper {
    ($(#[$Attr:meta])* $Vis:vis enum $Name:ident: $T:ty {
        $($(#[$ItemAttr:meta])* $Item:ident = $Value:expr),+ $(,)?
    }) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        $(#[$Attr])*
        $Vis enum $Name {
            $($(#[$ItemAttr])* $Item,)+
            Other($T),
        }

        impl $Name {
            #[inline]
            pub fn from_raw(raw: $T) -> $Name {
                $(if raw == ($Value as $T) {
                    $Name::$Item
                } else )+ {
                    $Name::Other(raw)
                }
            }

            #[inline]
            pub fn raw(&self) -> $T {
                match *self {
                    $($Name::$Item => $Value as $T,)+
                    $Name::Other(other) => other,
                }
            }
        }

        impl ::std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match *self {
                    $($Name::$Item => {
                        write!(f, concat!(stringify!($Name), "::",
                                          stringify!($Item), "({:?})"), self.raw())
                    })+
                    _ => write!(f, concat!(stringify!($Name), "({:?})"), self.raw()),
                }
            }
        }
    };
}

/// Maps a nullable C string field to the pair of getters every view offers.
macro_rules! cstr_field {
    ($(#[$Attr:meta])* $name:ident, $name_raw:ident, $lt:lifetime, $field:ident) => {
        $(#[$Attr])*
        #[inline]
        pub fn $name(&self) -> ::std::result::Result<&$lt str, Option<::std::str::Utf8Error>> {
            self.$name_raw()
                .map_or(Err(None), |s| s.to_str().map_err(Some))
        }

        #[inline]
        pub fn $name_raw(&self) -> Option<&$lt ::std::ffi::CStr> {
            unsafe {
                (*self.as_raw())
                    .$field
                    .as_ref()
                    .map(|s| ::std::ffi::CStr::from_ptr(s))
            }
        }
    };
}
