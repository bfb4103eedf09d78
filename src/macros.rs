/// Define a structure decoder wrapping the base MAC fields.
macro_rules! structure {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(::mac::fields::MacFields);

        impl $name {
            /// Create a new decoder over the given base fields.
            pub fn new(fields: ::mac::fields::MacFields) -> Self { $name(fields) }
        }
    };
}

/// Define a structure decoder that accepts continuation fragments.
macro_rules! multi_fragment_structure {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(::mac::fragment::FragmentChain);

        impl $name {
            /// Create a new decoder over the given base fields, with no fragments.
            pub fn new(fields: ::mac::fields::MacFields) -> Self {
                $name(::mac::fragment::FragmentChain::new(fields))
            }
        }

        impl ::mac::fragment::MultiFragment for $name {
            fn chain(&self) -> &::mac::fragment::FragmentChain { &self.0 }
            fn chain_mut(&mut self) -> &mut ::mac::fragment::FragmentChain { &mut self.0 }
        }
    };
}

/// Define the `Structure` enum over all decoders, delegating the common interface to
/// each variant. Variants listed under `multi` also expose their fragment chain.
macro_rules! structures {
    (
        single { $($single:ident,)* }
        multi { $($multi:ident,)* }
    ) => {
        /// Any decoded MAC structure.
        #[derive(Clone, Debug)]
        pub enum Structure {
            $($single($single),)*
            $($multi($multi),)*
        }

        impl ::mac::structure::MacStructure for Structure {
            fn fields(&self) -> &::mac::fields::MacFields {
                match *self {
                    $(Structure::$single(ref s) => s.fields(),)*
                    $(Structure::$multi(ref s) => s.fields(),)*
                }
            }

            fn opcode(&self) -> ::mac::opcode::MacOpcode {
                match *self {
                    $(Structure::$single(ref s) => s.opcode(),)*
                    $(Structure::$multi(ref s) => s.opcode(),)*
                }
            }

            fn length(&self) -> usize {
                match *self {
                    $(Structure::$single(ref s) => s.length(),)*
                    $(Structure::$multi(ref s) => s.length(),)*
                }
            }

            fn identifiers(&self) -> Vec<::ident::Identifier> {
                match *self {
                    $(Structure::$single(ref s) => s.identifiers(),)*
                    $(Structure::$multi(ref s) => s.identifiers(),)*
                }
            }

            fn channels(&self) -> Vec<::ident::ChannelDescriptor> {
                match *self {
                    $(Structure::$single(ref s) => s.channels(),)*
                    $(Structure::$multi(ref s) => s.channels(),)*
                }
            }

            fn service_options(&self) -> Option<::ident::ServiceOptions> {
                match *self {
                    $(Structure::$single(ref s) => s.service_options(),)*
                    $(Structure::$multi(ref s) => s.service_options(),)*
                }
            }
        }

        impl ::std::fmt::Display for Structure {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                match *self {
                    $(Structure::$single(ref s) => ::std::fmt::Display::fmt(s, f),)*
                    $(Structure::$multi(ref s) => ::std::fmt::Display::fmt(s, f),)*
                }
            }
        }

        impl Structure {
            /// Fragment chain of a multi-fragment structure.
            pub fn as_multi_fragment(&self) -> Option<&dyn $crate::mac::fragment::MultiFragment> {
                match *self {
                    $(Structure::$multi(ref s) => Some(s),)*
                    _ => None,
                }
            }

            /// Mutable fragment chain of a multi-fragment structure.
            pub fn as_multi_fragment_mut(&mut self)
                -> Option<&mut dyn $crate::mac::fragment::MultiFragment>
            {
                match *self {
                    $(Structure::$multi(ref mut s) => Some(s),)*
                    _ => None,
                }
            }
        }

        $(
            impl From<$single> for Structure {
                fn from(s: $single) -> Structure { Structure::$single(s) }
            }
        )*

        $(
            impl From<$multi> for Structure {
                fn from(s: $multi) -> Structure { Structure::$multi(s) }
            }
        )*
    };
}

/// Define a structure sent from one radio to another, both named by local address.
macro_rules! unit_to_unit_structure {
    ($(#[$meta:meta])* pub struct $name:ident = $label:expr;) => {
        structure! {
            $(#[$meta])*
            pub struct $name;
        }

        impl $name {
            const TARGET: ::field::Field = ::field::Field::span(::consts::OCTET_2_BIT_8, 24);
            const SOURCE: ::field::Field = ::field::Field::span(::consts::OCTET_5_BIT_32, 24);

            pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
            pub fn source(&self) -> u32 { self.0.int(&Self::SOURCE) }
        }

        impl ::mac::structure::MacStructure for $name {
            fn fields(&self) -> &::mac::fields::MacFields { &self.0 }

            fn identifiers(&self) -> Vec<::ident::Identifier> {
                vec![
                    ::ident::Identifier::radio(::ident::Role::To, self.target()),
                    ::ident::Identifier::radio(::ident::Role::From, self.source()),
                ]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{} FROM:{} TO:{}", $label, self.source(), self.target())
            }
        }
    };
}

/// Define a structure sent from a radio named by its home identity, which also serves as
/// its local address, to a radio named by local address.
macro_rules! unit_to_unit_extended_structure {
    ($(#[$meta:meta])* pub struct $name:ident = $label:expr;) => {
        structure! {
            $(#[$meta])*
            pub struct $name;
        }

        impl $name {
            const TARGET: ::field::Field = ::field::Field::span(::consts::OCTET_2_BIT_8, 24);
            const SOURCE_SUID: ::mac::fields::SuidFields =
                ::mac::fields::SuidFields::at(::consts::OCTET_5_BIT_32);

            pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }

            pub fn source(&self) -> ::ident::Identifier {
                Self::SOURCE_SUID.aliased_radio(&self.0, ::ident::Role::From)
            }
        }

        impl ::mac::structure::MacStructure for $name {
            fn fields(&self) -> &::mac::fields::MacFields { &self.0 }

            fn identifiers(&self) -> Vec<::ident::Identifier> {
                vec![
                    ::ident::Identifier::radio(::ident::Role::To, self.target()),
                    self.source(),
                ]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{} {} TO:{}", $label, self.source(), self.target())
            }
        }
    };
}

/// Define a multi-fragment structure sent between radios named by local address, where
/// the source's home identity follows in the base structure and the target's begins at
/// the end of the base structure and completes in the first continuation fragment.
macro_rules! unit_to_unit_lcch_structure {
    ($(#[$meta:meta])* pub struct $name:ident = $label:expr;) => {
        multi_fragment_structure! {
            $(#[$meta])*
            pub struct $name;
        }

        impl $name {
            const TARGET: ::field::Field = ::field::Field::span(::consts::OCTET_4_BIT_24, 24);
            const SOURCE: ::field::Field = ::field::Field::span(::consts::OCTET_7_BIT_48, 24);
            const SOURCE_SUID: ::mac::fields::SuidFields =
                ::mac::fields::SuidFields::at(::consts::OCTET_10_BIT_72);
            const TARGET_WACN_HIGH: ::field::Field =
                ::field::Field::span(::consts::OCTET_17_BIT_128, 16);
            const TARGET_WACN_LOW: ::field::Field = ::field::Field::span(0, 4);
            const TARGET_SYSTEM: ::field::Field = ::field::Field::span(4, 12);
            const TARGET_ID: ::field::Field = ::field::Field::span(16, 24);

            /// Target, qualified by home network once the first fragment has arrived.
            pub fn target(&self) -> Option<::ident::Identifier> {
                use ::mac::fragment::MultiFragment;

                let local = self.0.base().get(&Self::TARGET)?;

                let home = self.split_int(&Self::TARGET_WACN_HIGH, 0, &Self::TARGET_WACN_LOW)
                    .and_then(|wacn| Some((wacn,
                        self.fragment_int(0, &Self::TARGET_SYSTEM)?,
                        self.fragment_int(0, &Self::TARGET_ID)?)));

                Some(match home {
                    Some((wacn, system, id)) => ::ident::Identifier::roaming_radio(
                        ::ident::Role::To, local, wacn, system as u16, id),
                    None => ::ident::Identifier::radio(::ident::Role::To, local),
                })
            }

            pub fn source(&self) -> Option<::ident::Identifier> {
                let f = self.0.base();
                f.get(&Self::SOURCE)
                    .map(|local| Self::SOURCE_SUID.radio(f, ::ident::Role::From, local))
            }
        }

        impl ::mac::structure::MacStructure for $name {
            fn fields(&self) -> &::mac::fields::MacFields { self.0.base() }

            fn identifiers(&self) -> Vec<::ident::Identifier> {
                self.target().into_iter().chain(self.source()).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", $label)?;

                if let Some(source) = self.source() {
                    write!(f, " {}", source)?;
                }

                if let Some(target) = self.target() {
                    write!(f, " {}", target)?;
                }

                Ok(())
            }
        }
    };
}
