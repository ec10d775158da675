mod submatrix;
mod transform;
