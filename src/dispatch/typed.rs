//! Statically typed dispatchers.

/// Declares a dispatcher struct whose actions keep their reducer's exact
/// parameter list.
///
/// Each `fn name(args) => reducer;` line becomes a method `name(&self, args)
/// -> bool` that calls `reducer(current_state, args...)`. The reducer must be
/// a function path or a closure with annotated parameter types. The state type
/// must implement [`ShallowEq`](crate::ShallowEq).
///
/// A fallible reducer `(state, args...) -> Result<state, E>` is declared with
/// `fn name(args) -> Result<_, E> => reducer;`. Its method returns
/// `Result<bool, E>`, passing the reducer's error through untouched.
///
/// Action names must not collide with the generated `build`, `with_policy`
/// and `keys` associated functions.
///
/// ```
/// use reducer_dispatch::Store;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     count: i64,
/// }
///
/// reducer_dispatch::shallow_eq!(Counter { count });
///
/// fn add(state: Counter, amount: i64) -> Counter {
///     Counter { count: state.count + amount }
/// }
///
/// reducer_dispatch::dispatcher! {
///     struct CounterActions for Counter {
///         fn add(amount: i64) => add;
///         fn reset() => |_: Counter| Counter { count: 0 };
///         fn halve() -> Result<_, &'static str> => |state: Counter| {
///             if state.count % 2 == 0 {
///                 Ok(Counter { count: state.count / 2 })
///             } else {
///                 Err("odd count")
///             }
///         };
///     }
/// }
///
/// let store = Store::new(Counter { count: 1 });
/// let actions = CounterActions::build(store.clone(), store.clone());
/// assert!(actions.add(2));
/// assert_eq!(store.get().count, 3);
/// assert_eq!(actions.halve(), Err("odd count"));
/// assert_eq!(CounterActions::KEYS, &["add", "reset", "halve"]);
/// ```
#[macro_export]
macro_rules! dispatcher {
    (@error []) => { ::std::convert::Infallible };
    (@error [$err:ty]) => { $err };

    (@reducer [] $state:ty; $reduce:ident; $($arg:ident : $arg_ty:ty),*) => {
        $crate::Reducer::new(move |state: $state, ($($arg,)*): ($($arg_ty,)*)| {
            $reduce(state, $($arg),*)
        })
    };
    (@reducer [$err:ty] $state:ty; $reduce:ident; $($arg:ident : $arg_ty:ty),*) => {
        $crate::Reducer::fallible(
            move |state: $state, ($($arg,)*): ($($arg_ty,)*)| -> ::std::result::Result<$state, $err> {
                $reduce(state, $($arg),*)
            },
        )
    };

    (@method [] $(#[$meta:meta])* $action:ident($($arg:ident : $arg_ty:ty),*)) => {
        $(#[$meta])*
        pub fn $action(&self, $($arg: $arg_ty),*) -> bool {
            self.$action.call(($($arg,)*))
        }
    };
    (@method [$err:ty] $(#[$meta:meta])* $action:ident($($arg:ident : $arg_ty:ty),*)) => {
        $(#[$meta])*
        pub fn $action(&self, $($arg: $arg_ty),*) -> ::std::result::Result<bool, $err> {
            self.$action.try_call(($($arg,)*))
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $state:ty {
            $(
                $(#[$action_meta:meta])*
                fn $action:ident($($arg:ident : $arg_ty:ty),* $(,)?)
                    $(-> Result<_, $err:ty>)? => $reducer:expr;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $action: $crate::Action<
                    $state,
                    ($($arg_ty,)*),
                    $crate::dispatcher!(@error [$($err)?]),
                >,
            )*
        }

        impl $name {
            /// Action names, in declaration order.
            #[allow(dead_code)]
            pub const KEYS: &'static [&'static str] = &[$(stringify!($action)),*];

            pub fn build<G, D>(get_state: G, dispatch: D) -> Self
            where
                G: $crate::StateSource<$state> + Send + Sync + 'static,
                D: $crate::StateSink<$state> + Send + Sync + 'static,
            {
                Self::with_policy(get_state, dispatch, $crate::CommitPolicy::default())
            }

            #[allow(dead_code)]
            pub fn with_policy<G, D>(
                get_state: G,
                dispatch: D,
                policy: $crate::CommitPolicy,
            ) -> Self
            where
                G: $crate::StateSource<$state> + Send + Sync + 'static,
                D: $crate::StateSink<$state> + Send + Sync + 'static,
            {
                let binding = $crate::Binding::shared(get_state, dispatch);
                Self {
                    $(
                        $action: $crate::Action::new(
                            stringify!($action),
                            {
                                let reduce = $reducer;
                                $crate::dispatcher!(
                                    @reducer [$($err)?] $state; reduce; $($arg: $arg_ty),*
                                )
                            },
                            ::std::sync::Arc::clone(&binding),
                            policy,
                        ),
                    )*
                }
            }

            #[allow(dead_code)]
            pub fn keys(&self) -> &'static [&'static str] {
                Self::KEYS
            }

            $(
                $crate::dispatcher!(
                    @method [$($err)?] $(#[$action_meta])* $action($($arg: $arg_ty),*)
                );
            )*
        }
    };
}
