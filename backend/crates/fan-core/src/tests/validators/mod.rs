mod contact;
mod formatting;
