//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive `Solver` by dispatching each part to its `PartSolver<N>` impl
///
/// # Attributes
///
/// - `#[puzzle_solver(max_parts = N)]`: required, `1..=255`
///
/// Part `k` in `1..=N` calls `<Self as PartSolver<k>>::solve`; any other part
/// returns `SolveError::PartNotImplemented`. Every `PartSolver<k>` must exist,
/// otherwise compilation fails with an unsatisfied trait bound.
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(max_parts = 2)]
/// struct Day1;
///
/// impl PuzzleParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "PuzzleSolver requires #[puzzle_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unknown puzzle_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "max_parts must be at least 1")),
        Some(n) => n,
        None => return Err(syn::Error::new_spanned(attr, "missing `max_parts`")),
    };

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::puzzle_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::puzzle_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::puzzle_solver::PuzzleParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::puzzle_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Derive a `SolverPlugin` submission so the solver registers itself
///
/// # Attributes
///
/// - `event`: optional, `"aoc"` (default) or `"ec"`
/// - `year`: required
/// - `day`: required; the quest number for Everybody Codes
/// - `tags`: optional array of string literals used for filtering
///
/// The type must implement `Solver`; the generated code checks this with a
/// trait bound so the error points at the struct.
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(max_parts = 3)]
/// #[puzzle(event = "ec", year = 2024, day = 1, tags = ["easy"])]
/// pub struct Quest1;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolver cannot register generic types",
        ));
    }

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver requires #[puzzle(year = .., day = ..)]",
            )
        })?;

    let mut event = quote! { ::puzzle_solver::Event::AdventOfCode };
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("event") {
            let lit: LitStr = meta.value()?.parse()?;
            event = match lit.value().as_str() {
                "aoc" => quote! { ::puzzle_solver::Event::AdventOfCode },
                "ec" => quote! { ::puzzle_solver::Event::EverybodyCodes },
                _ => return Err(syn::Error::new_spanned(lit, "event must be \"aoc\" or \"ec\"")),
            };
        } else if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            day = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(|stream| stream.parse::<LitStr>(), syn::Token![,])?;
            tags.extend(list);
        } else {
            return Err(meta.error("unknown puzzle attribute, expected event, year, day or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    let check = syn::Ident::new(&format!("__MustImplementSolver{}", name), Span::call_site());

    Ok(quote! {
        const _: () = {
            trait #check: ::puzzle_solver::Solver {}
            impl #check for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                event: #event,
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
